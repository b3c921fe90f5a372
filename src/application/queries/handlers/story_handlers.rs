//! Story Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::StoryCatalogPort;
use crate::application::queries::{GetPageContent, ListStories};
use crate::domain::Story;

pub const STORY_NOT_FOUND: &str = "Story not found";
pub const PAGE_NOT_FOUND: &str = "Page not found";

// ============================================================================
// Response DTOs
// ============================================================================

/// 故事摘要
#[derive(Debug, Clone, PartialEq)]
pub struct StorySummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_image_url: String,
}

impl StorySummary {
    fn from_story(story: &Story, asset_base: &str) -> Self {
        Self {
            id: story.id().to_string(),
            title: story.title().to_string(),
            author: story.author().to_string(),
            cover_image_url: story.cover_image().url(asset_base),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListStories Handler
pub struct ListStoriesHandler {
    catalog: Arc<dyn StoryCatalogPort>,
    /// 封面图片的静态资源前缀，如 `/static/images`
    asset_base: String,
}

impl ListStoriesHandler {
    pub fn new(catalog: Arc<dyn StoryCatalogPort>, asset_base: impl Into<String>) -> Self {
        Self {
            catalog,
            asset_base: asset_base.into(),
        }
    }

    pub fn handle(&self, _query: ListStories) -> Vec<StorySummary> {
        self.catalog
            .stories()
            .iter()
            .map(|story| StorySummary::from_story(story, &self.asset_base))
            .collect()
    }
}

/// GetPageContent Handler
pub struct GetPageContentHandler {
    catalog: Arc<dyn StoryCatalogPort>,
}

impl GetPageContentHandler {
    pub fn new(catalog: Arc<dyn StoryCatalogPort>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetPageContent) -> Result<String, ApplicationError> {
        let story = self
            .catalog
            .find_by_id(&query.story_id)
            .ok_or_else(|| ApplicationError::not_found(STORY_NOT_FOUND))?;

        let text = story
            .page(query.page)
            .ok_or_else(|| ApplicationError::not_found(PAGE_NOT_FOUND))?;

        tracing::debug!(
            story_id = %query.story_id,
            page = %query.page,
            "Page content resolved"
        );

        Ok(text.to_string())
    }
}

//! In-Memory Story Catalog
//!
//! 构建后不可变，可在任意数量的请求间无锁共享

use std::collections::HashSet;

use crate::application::ports::StoryCatalogPort;
use crate::domain::{Story, StoryError};

use super::builtin_stories::builtin_stories;

/// 内存故事目录
#[derive(Debug, Clone)]
pub struct InMemoryStoryCatalog {
    stories: Vec<Story>,
}

impl InMemoryStoryCatalog {
    /// 创建目录，故事 ID 必须唯一
    pub fn new(stories: Vec<Story>) -> Result<Self, StoryError> {
        let mut seen = HashSet::with_capacity(stories.len());
        for story in &stories {
            if !seen.insert(story.id().as_str()) {
                return Err(StoryError::DuplicateId(story.id().clone()));
            }
        }

        Ok(Self { stories })
    }

    /// 使用内置故事创建目录
    pub fn builtin() -> Result<Self, StoryError> {
        let catalog = Self::new(builtin_stories()?)?;
        tracing::info!(stories = catalog.stories.len(), "Story catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl StoryCatalogPort for InMemoryStoryCatalog {
    fn stories(&self) -> &[Story] {
        &self.stories
    }
}

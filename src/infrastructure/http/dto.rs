//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::StorySummary;

// ============================================================================
// Story DTOs
// ============================================================================

/// 故事摘要（`cover_image` 为可直接访问的 URL）
#[derive(Debug, Serialize)]
pub struct StorySummaryDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_image: String,
}

impl From<StorySummary> for StorySummaryDto {
    fn from(summary: StorySummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            author: summary.author,
            cover_image: summary.cover_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoriesResponse {
    pub stories: Vec<StorySummaryDto>,
}

/// `page` 可能是整数、浮点数或数字字符串，在 handler 中转换
#[derive(Debug, Deserialize)]
pub struct GetPageContentRequest {
    #[serde(rename = "storyId", default)]
    pub story_id: Option<String>,
    #[serde(default)]
    pub page: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct PageContentResponse {
    pub text: String,
}

// ============================================================================
// Audio DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateAudioRequest {
    #[serde(default)]
    pub text: Option<String>,
}

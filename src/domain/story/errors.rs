//! Story Context - Errors

use thiserror::Error;

use super::StoryId;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("无效的故事 ID: {0}")]
    InvalidId(String),

    #[error("故事没有任何页面: {0}")]
    NoPages(StoryId),

    #[error("故事 ID 重复: {0}")]
    DuplicateId(StoryId),
}

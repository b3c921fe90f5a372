//! Story Queries

use crate::domain::PageNumber;

/// 列出所有故事查询
#[derive(Debug, Clone)]
pub struct ListStories;

/// 获取故事某一页文本的查询
#[derive(Debug, Clone)]
pub struct GetPageContent {
    pub story_id: String,
    pub page: PageNumber,
}

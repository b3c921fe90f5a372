//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：故事目录的只读查询

mod story_queries;

pub mod handlers;

pub use story_queries::*;

//! In-Memory Implementations
//!
//! 内存目录实现：故事数据随进程启动加载

mod builtin_stories;
mod story_catalog;

pub use builtin_stories::builtin_stories;
pub use story_catalog::InMemoryStoryCatalog;

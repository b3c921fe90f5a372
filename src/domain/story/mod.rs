//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事聚合（标题、作者、封面、按顺序排列的页面）
//! - 页码越界判定

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Story;
pub use errors::StoryError;
pub use value_objects::{CoverImage, PageNumber, StoryId};

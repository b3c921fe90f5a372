//! Story Catalog Port - 只读故事目录
//!
//! 目录在进程启动时构建，之后不再修改，因此接口是同步且无锁的

use crate::domain::Story;

/// Story Catalog Port
pub trait StoryCatalogPort: Send + Sync {
    /// 按插入顺序返回全部故事
    fn stories(&self) -> &[Story];

    /// 按 ID 查找故事
    fn find_by_id(&self, id: &str) -> Option<&Story> {
        self.stories().iter().find(|story| story.id().as_str() == id)
    }
}

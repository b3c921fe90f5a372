//! Story Context - Aggregate Root

use super::{CoverImage, PageNumber, StoryError, StoryId};

/// 故事聚合根
///
/// 进程启动时构建，之后只读
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    id: StoryId,
    title: String,
    author: String,
    cover_image: CoverImage,
    pages: Vec<String>,
}

impl Story {
    /// 创建故事，页面列表不能为空
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        cover_image: impl Into<String>,
        pages: Vec<String>,
    ) -> Result<Self, StoryError> {
        let id = id.into();
        let id = StoryId::new(id.clone()).map_err(|_| StoryError::InvalidId(id))?;

        if pages.is_empty() {
            return Err(StoryError::NoPages(id));
        }

        Ok(Self {
            id,
            title: title.into(),
            author: author.into(),
            cover_image: CoverImage::new(cover_image),
            pages,
        })
    }

    pub fn id(&self) -> &StoryId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn cover_image(&self) -> &CoverImage {
        &self.cover_image
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 获取指定页的文本，越界返回 None
    pub fn page(&self, page: PageNumber) -> Option<&str> {
        page.index_within(self.pages.len())
            .map(|index| self.pages[index].as_str())
    }
}

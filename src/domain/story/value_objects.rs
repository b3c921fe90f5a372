//! Story Context - Value Objects

/// 故事唯一标识（不透明字符串，如 `remy_rabbit`）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.is_empty() {
            return Err("故事 ID 不能为空");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 封面图片文件名
///
/// 只是静态资源目录下的文件名，不是 URL；URL 在查询时拼接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self(filename.into())
    }

    pub fn filename(&self) -> &str {
        &self.0
    }

    /// 基于静态资源前缀生成可访问的 URL
    pub fn url(&self, asset_base: &str) -> String {
        format!("{}/{}", asset_base.trim_end_matches('/'), self.0)
    }
}

/// 页码（从 0 开始）
///
/// 允许负数：越界由 [`super::Story::page`] 判定为 "未找到"，而不是解析错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(i64);

impl PageNumber {
    pub fn new(page: i64) -> Self {
        Self(page)
    }

    /// 在 `[0, len)` 内时返回对应下标
    pub fn index_within(&self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&index| index < len)
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_story_id_rejected() {
        assert!(StoryId::new("").is_err());
        assert_eq!(StoryId::new("space_cat").unwrap().as_str(), "space_cat");
    }

    #[test]
    fn test_cover_image_url() {
        let cover = CoverImage::new("cat_in_space.jpg");
        assert_eq!(cover.url("/static/images"), "/static/images/cat_in_space.jpg");
        assert_eq!(cover.url("/static/images/"), "/static/images/cat_in_space.jpg");
    }

    #[test]
    fn test_page_index_within() {
        assert_eq!(PageNumber::new(0).index_within(6), Some(0));
        assert_eq!(PageNumber::new(5).index_within(6), Some(5));
        assert_eq!(PageNumber::new(6).index_within(6), None);
        assert_eq!(PageNumber::new(-1).index_within(6), None);
        assert_eq!(PageNumber::new(0).index_within(0), None);
    }
}

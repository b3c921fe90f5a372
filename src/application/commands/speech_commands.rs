//! Speech Commands

/// 生成音频命令
///
/// `text` 为 None 表示请求中缺少该字段
#[derive(Debug, Clone)]
pub struct GenerateAudio {
    pub text: Option<String>,
}

//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，HTTP 层据此做完整的状态码映射

use thiserror::Error;

use crate::application::ports::TtsError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求字段缺失或格式错误
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 资源未找到（未知故事或页码越界）
    #[error("Not found: {0}")]
    NotFound(String),

    /// 依赖未初始化
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// 外部服务调用失败
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ApplicationError {
    /// 创建输入错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 创建不可用错误
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// 返回面向调用方的原始消息（不带分类前缀）
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg)
            | Self::NotFound(msg)
            | Self::Unavailable(msg)
            | Self::Upstream(msg) => msg,
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tts_error_message_is_kept_verbatim() {
        let err: ApplicationError = TtsError::ProviderApiError {
            status: 401,
            body: "invalid_api_key".to_string(),
        }
        .into();
        assert!(matches!(err, ApplicationError::Upstream(_)));
        assert_eq!(err.message(), "status_code: 401, body: invalid_api_key");
    }

    #[test]
    fn test_message_strips_kind_prefix() {
        let err = ApplicationError::not_found("Story not found");
        assert_eq!(err.message(), "Story not found");
        assert_eq!(err.to_string(), "Not found: Story not found");
    }
}

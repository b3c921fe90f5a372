//! Speech Synthesizer Port - 语音合成服务抽象
//!
//! 外部合成服务以音频块流的形式返回结果，具体实现在 infrastructure/adapters 层

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;
use thiserror::Error;

use crate::domain::SynthesisRequest;

/// TTS 错误
///
/// Display 内容会原样返回给调用方
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("{0}")]
    NetworkError(String),

    #[error("status_code: {status}, body: {body}")]
    ProviderApiError { status: u16, body: String },

    #[error("{0}")]
    StreamError(String),
}

/// 音频块流
///
/// 有限、惰性、不可重放；每个元素是按到达顺序排列的一段音频
pub type AudioChunkStream = Pin<Box<dyn Stream<Item = Result<Bytes, TtsError>> + Send>>;

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 发起一次合成调用，返回音频块流
    async fn synthesize(&self, request: SynthesisRequest) -> Result<AudioChunkStream, TtsError>;

    /// 提供方名称（用于日志）
    fn name(&self) -> &str;
}

//! Fake TTS Client - 离线开发用的合成客户端
//!
//! 始终返回配置好的固定音频块，不访问网络

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream;

use crate::application::ports::{AudioChunkStream, SpeechSynthesizerPort, TtsError};
use crate::domain::SynthesisRequest;

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 依次返回的音频块
    pub chunks: Vec<Bytes>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            // ID3 头 + 一个 MPEG-1 Layer III 帧头
            chunks: vec![
                Bytes::from_static(b"ID3\x04\x00\x00\x00\x00\x00\x00"),
                Bytes::from_static(&[0xFF, 0xFB, 0x90, 0x64, 0x00]),
            ],
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        tracing::info!(chunks = config.chunks.len(), "FakeTtsClient initialized");
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<AudioChunkStream, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "FakeTtsClient: returning fixed audio"
        );

        let chunks: Vec<Result<Bytes, TtsError>> =
            self.config.chunks.iter().cloned().map(Ok).collect();
        Ok(Box::pin(stream::iter(chunks)))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_returns_configured_chunks_in_order() {
        let client = FakeTtsClient::new(FakeTtsClientConfig {
            chunks: vec![Bytes::from_static(b"a"), Bytes::from_static(b"bc")],
        });

        let stream = client.synthesize(SynthesisRequest::new("x")).await.unwrap();
        let chunks: Vec<Bytes> = stream.map(|c| c.unwrap()).collect().await;
        assert_eq!(chunks, vec![Bytes::from_static(b"a"), Bytes::from_static(b"bc")]);
    }
}

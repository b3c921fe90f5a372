//! ElevenLabs Client - 调用 ElevenLabs 文本转语音 API
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST {base_url}/v1/text-to-speech/{voice_id}?output_format=mp3_44100_128
//! Headers: xi-api-key
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: audio/mpeg binary (chunked)

use async_trait::async_trait;
use futures_util::StreamExt;
use http::header::ACCEPT;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::application::ports::{AudioChunkStream, SpeechSynthesizerPort, TtsError};
use crate::domain::{SynthesisRequest, VoiceSettings, AUDIO_MPEG};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API 密钥
    pub api_key: SecretString,
}

impl ElevenLabsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_ELEVENLABS_API_URL.to_string(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// ElevenLabs 客户端
///
/// 内部的 reqwest::Client 自带连接池，所有请求共享同一个实例
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    /// 创建新的客户端（不设置请求超时，沿用传输层默认行为）
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesis_url(&self, request: &SynthesisRequest) -> String {
        format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.config.base_url.trim_end_matches('/'),
            request.voice_id,
            request.output_format
        )
    }
}

#[async_trait]
impl SpeechSynthesizerPort for ElevenLabsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<AudioChunkStream, TtsError> {
        let url = self.synthesis_url(&request);
        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: request.voice_settings,
        };

        tracing::debug!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            text_len = request.text.len(),
            "Sending ElevenLabs synthesis request"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.config.api_key.expose_secret())
            .header(ACCEPT, AUDIO_MPEG)
            .json(&body)
            .send()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %error_text, "ElevenLabs API error");
            return Err(TtsError::ProviderApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| TtsError::StreamError(e.to_string())));

        Ok(Box::pin(stream))
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}

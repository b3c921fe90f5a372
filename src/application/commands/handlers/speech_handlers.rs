//! Speech Command Handlers

use std::sync::Arc;

use futures_util::StreamExt;

use crate::application::commands::GenerateAudio;
use crate::application::error::ApplicationError;
use crate::application::ports::SpeechSynthesizerPort;
use crate::domain::{SynthesisRequest, SynthesizedAudio, AUDIO_MPEG};

pub const CLIENT_NOT_INITIALIZED: &str = "ElevenLabs client not initialized.";
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// GenerateAudio Handler
///
/// 单次调用合成服务，把音频块流完整读完后一次性返回；不重试，不返回部分结果
pub struct GenerateAudioHandler {
    synthesizer: Option<Arc<dyn SpeechSynthesizerPort>>,
}

impl GenerateAudioHandler {
    /// `synthesizer` 为 None 时所有请求直接失败
    pub fn new(synthesizer: Option<Arc<dyn SpeechSynthesizerPort>>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(&self, command: GenerateAudio) -> Result<SynthesizedAudio, ApplicationError> {
        let synthesizer = self
            .synthesizer
            .as_ref()
            .ok_or_else(|| ApplicationError::unavailable(CLIENT_NOT_INITIALIZED))?;

        let text = command
            .text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ApplicationError::invalid_input(NO_TEXT_PROVIDED))?;

        let text_len = text.len();
        let mut stream = synthesizer
            .synthesize(SynthesisRequest::new(text))
            .await
            .inspect_err(|e| {
                tracing::error!(provider = synthesizer.name(), error = %e, "Error generating audio");
            })?;

        let mut audio_data = Vec::new();
        let mut chunks = 0usize;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.inspect_err(|e| {
                tracing::error!(
                    provider = synthesizer.name(),
                    chunks_received = chunks,
                    error = %e,
                    "Audio stream failed"
                );
            })?;
            audio_data.extend_from_slice(&chunk);
            chunks += 1;
        }

        tracing::info!(
            provider = synthesizer.name(),
            text_len,
            chunks,
            audio_size = audio_data.len(),
            "Audio generated"
        );

        Ok(SynthesizedAudio {
            audio_data,
            content_type: AUDIO_MPEG,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;
    use futures_util::stream;

    use crate::application::ports::{AudioChunkStream, TtsError};

    /// 可编排的合成服务：记录调用次数和收到的请求
    struct ScriptedSynthesizer {
        chunks: Vec<Result<&'static [u8], &'static str>>,
        fail_on_call: Option<&'static str>,
        calls: AtomicUsize,
        last_request: Mutex<Option<SynthesisRequest>>,
    }

    impl ScriptedSynthesizer {
        fn with_chunks(chunks: Vec<Result<&'static [u8], &'static str>>) -> Self {
            Self {
                chunks,
                fail_on_call: None,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                fail_on_call: Some(message),
                ..Self::with_chunks(Vec::new())
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizerPort for ScriptedSynthesizer {
        async fn synthesize(&self, request: SynthesisRequest) -> Result<AudioChunkStream, TtsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);

            if let Some(message) = self.fail_on_call {
                return Err(TtsError::NetworkError(message.to_string()));
            }

            let items: Vec<Result<Bytes, TtsError>> = self
                .chunks
                .iter()
                .map(|chunk| match chunk {
                    Ok(bytes) => Ok(Bytes::from_static(*bytes)),
                    Err(message) => Err(TtsError::StreamError(message.to_string())),
                })
                .collect();
            Ok(Box::pin(stream::iter(items)))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn command(text: Option<&str>) -> GenerateAudio {
        GenerateAudio {
            text: text.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_chunks_are_concatenated_in_order() {
        let synthesizer = Arc::new(ScriptedSynthesizer::with_chunks(vec![
            Ok(&b"ID3"[..]),
            Ok(&b"\xff\xfb"[..]),
            Ok(&b""[..]),
            Ok(&b"tail"[..]),
        ]));
        let handler = GenerateAudioHandler::new(Some(synthesizer.clone()));

        let audio = handler.handle(command(Some("Once upon a time"))).await.unwrap();

        assert_eq!(audio.audio_data, b"ID3\xff\xfbtail".to_vec());
        assert_eq!(audio.content_type, "audio/mpeg");
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 1);

        let request = synthesizer.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request, SynthesisRequest::new("Once upon a time"));
    }

    #[tokio::test]
    async fn test_empty_stream_yields_empty_audio() {
        let handler =
            GenerateAudioHandler::new(Some(Arc::new(ScriptedSynthesizer::with_chunks(Vec::new()))));
        let audio = handler.handle(command(Some("hi"))).await.unwrap();
        assert!(audio.audio_data.is_empty());
    }

    #[tokio::test]
    async fn test_empty_or_missing_text_skips_provider() {
        let synthesizer = Arc::new(ScriptedSynthesizer::with_chunks(vec![Ok(&b"x"[..])]));
        let handler = GenerateAudioHandler::new(Some(synthesizer.clone()));

        for text in [None, Some("")] {
            let err = handler.handle(command(text)).await.unwrap_err();
            assert!(matches!(err, ApplicationError::InvalidInput(_)));
            assert_eq!(err.message(), NO_TEXT_PROVIDED);
        }
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_uninitialized_gateway() {
        let handler = GenerateAudioHandler::new(None);

        let err = handler.handle(command(Some("hello"))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unavailable(_)));
        assert_eq!(err.message(), CLIENT_NOT_INITIALIZED);
    }

    #[tokio::test]
    async fn test_call_failure_is_passed_through() {
        let handler =
            GenerateAudioHandler::new(Some(Arc::new(ScriptedSynthesizer::failing("connection refused"))));
        let err = handler.handle(command(Some("hello"))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
        assert_eq!(err.message(), "connection refused");
    }

    #[tokio::test]
    async fn test_mid_stream_failure_returns_no_audio() {
        let synthesizer = Arc::new(ScriptedSynthesizer::with_chunks(vec![
            Ok(&b"partial"[..]),
            Err("quota exceeded"),
            Ok(&b"never read"[..]),
        ]));
        let handler = GenerateAudioHandler::new(Some(synthesizer));

        let err = handler.handle(command(Some("hello"))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
        assert_eq!(err.message(), "quota exceeded");
    }
}

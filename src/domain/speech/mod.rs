//! Speech Context - 语音合成领域模型
//!
//! 合成参数在本部署中是固定常量，不对用户开放

use serde::Serialize;

/// 默认音色 ID
pub const DEFAULT_VOICE_ID: &str = "JBFqnCBsd6RMkjVDRZzb";

/// 默认模型 ID
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// 输出格式（MP3, 44.1kHz, 128kbps）
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";

/// 合成音频的 MIME 类型
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// 语音表现参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// 语音合成请求
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// 要朗读的文本
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
    pub voice_settings: VoiceSettings,
}

impl SynthesisRequest {
    /// 使用固定的音色、模型和参数构建请求
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}

/// 合成结果：完整的音频数据
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}

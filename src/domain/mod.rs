//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Story Context: 故事目录
//! - Speech Context: 语音合成参数

pub mod speech;
pub mod story;

pub use speech::{SynthesisRequest, SynthesizedAudio, VoiceSettings, AUDIO_MPEG};
pub use story::{CoverImage, PageNumber, Story, StoryError, StoryId};

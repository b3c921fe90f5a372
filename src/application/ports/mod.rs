//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_synthesizer;
mod story_catalog;

pub use speech_synthesizer::{AudioChunkStream, SpeechSynthesizerPort, TtsError};
pub use story_catalog::StoryCatalogPort;

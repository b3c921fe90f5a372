//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StoryCatalog、SpeechSynthesizer）
//! - commands: CQRS 命令及处理器（语音合成）
//! - queries: CQRS 查询及处理器（故事目录）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{GenerateAudioHandler, CLIENT_NOT_INITIALIZED, NO_TEXT_PROVIDED},
    GenerateAudio,
};

pub use error::ApplicationError;

pub use ports::{AudioChunkStream, SpeechSynthesizerPort, StoryCatalogPort, TtsError};

pub use queries::{
    handlers::{
        GetPageContentHandler, ListStoriesHandler, StorySummary, PAGE_NOT_FOUND, STORY_NOT_FOUND,
    },
    GetPageContent, ListStories,
};

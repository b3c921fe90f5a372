//! 应用层 - 命令
//!
//! CQRS 命令侧：语音合成

mod speech_commands;

pub mod handlers;

pub use speech_commands::*;

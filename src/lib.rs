//! Storytime - 儿童故事服务 + 语音合成网关
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事聚合、页码
//! - Speech Context: 固定的合成参数
//!
//! 应用层 (application/):
//! - Ports: StoryCatalogPort, SpeechSynthesizerPort
//! - Queries: 故事列表、页面文本
//! - Commands: 文本转语音
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + 首页 + 静态资源
//! - Memory: 内置故事目录
//! - Adapters: ElevenLabs 客户端、Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! Configuration Types
//!
//! 定义所有配置结构体

use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音合成配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 首页 HTML 模板路径
    #[serde(default = "default_index_template")]
    pub index_template: PathBuf,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀
    #[serde(default = "default_static_path")]
    pub path: String,

    /// 封面图片所在的子目录
    #[serde(default = "default_images_subdir")]
    pub images_subdir: String,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_static_path() -> String {
    "/static".to_string()
}

fn default_images_subdir() -> String {
    "images".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
            path: default_static_path(),
            images_subdir: default_images_subdir(),
        }
    }
}

impl StaticFilesConfig {
    /// 封面图片的 URL 前缀，如 `/static/images`
    pub fn image_base_url(&self) -> String {
        format!(
            "{}/{}",
            self.path.trim_end_matches('/'),
            self.images_subdir.trim_matches('/')
        )
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_index_template() -> PathBuf {
    PathBuf::from("templates/index.html")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            index_template: default_index_template(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 语音合成服务提供方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    #[default]
    Elevenlabs,
    /// 返回固定音频，用于离线开发
    Fake,
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub provider: TtsProvider,

    /// API 基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// API 密钥；未设置时回退到 `ELEVENLABS_API_KEY` 环境变量
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

fn default_tts_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            base_url: default_tts_base_url(),
            api_key: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

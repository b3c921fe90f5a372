//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, TtsProvider};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 合成服务密钥的约定环境变量
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `STORYTIME_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `STORYTIME_SERVER__HOST=0.0.0.0`
/// - `STORYTIME_SERVER__PORT=8080`
/// - `STORYTIME_TTS__PROVIDER=fake`
/// - `ELEVENLABS_API_KEY=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("server.index_template", "templates/index.html")?
        .set_default("server.static_files.dir", "static")?
        .set_default("server.static_files.path", "/static")?
        .set_default("server.static_files.images_subdir", "images")?
        .set_default("tts.provider", "elevenlabs")?
        .set_default("tts.base_url", "https://api.elevenlabs.io")?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: STORYTIME_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("STORYTIME")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    apply_api_key_fallback(&mut app_config, std::env::var(API_KEY_ENV).ok());

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 配置中未设置密钥时使用环境变量中的值（空白字符串视为未设置）
fn apply_api_key_fallback(config: &mut AppConfig, env_value: Option<String>) {
    config.tts.api_key = config
        .tts
        .api_key
        .take()
        .filter(|key| !key.expose_secret().trim().is_empty())
        .or_else(|| {
            env_value
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from)
        });
}

/// 验证配置有效性
///
/// 缺少密钥不是配置错误：合成网关保持未初始化状态
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let static_path = &config.server.static_files.path;
    if !static_path.starts_with('/') || static_path.trim_end_matches('/').is_empty() {
        return Err(ConfigError::ValidationError(
            "Static files path must start with '/' and cannot be the root".to_string(),
        ));
    }

    if config.tts.provider == TtsProvider::Elevenlabs && config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不输出密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Index Template: {:?}", config.server.index_template);
    tracing::info!(
        "Static Files: {} -> {:?}",
        config.server.static_files.path,
        config.server.static_files.dir
    );
    tracing::info!("Cover Images: {}", config.server.static_files.image_base_url());
    tracing::info!("TTS Provider: {:?}", config.tts.provider);
    tracing::info!("TTS Base URL: {}", config.tts.base_url);
    tracing::info!("TTS API Key: {}", if config.tts.api_key.is_some() { "set" } else { "missing" });
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

//! Storytime - 儿童故事服务 + 语音合成网关

use std::sync::Arc;

use secrecy::ExposeSecret;

use storytime::application::SpeechSynthesizerPort;
use storytime::config::{load_config, print_config, AppConfig, TtsProvider, API_KEY_ENV};
use storytime::infrastructure::adapters::{ElevenLabsClient, ElevenLabsClientConfig, FakeTtsClient};
use storytime::infrastructure::http::{AppState, HttpServer, ServerConfig};
use storytime::infrastructure::memory::InMemoryStoryCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},storytime={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Storytime v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 故事目录（只读，启动时构建）
    let catalog = Arc::new(InMemoryStoryCatalog::builtin()?);

    // 语音合成客户端；初始化失败不阻止启动
    let synthesizer = build_synthesizer(&config);

    let state = AppState::new(
        catalog,
        config.server.static_files.image_base_url(),
        synthesizer,
    );
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 按配置创建合成客户端，缺少密钥或创建失败时返回 None
fn build_synthesizer(config: &AppConfig) -> Option<Arc<dyn SpeechSynthesizerPort>> {
    match config.tts.provider {
        TtsProvider::Fake => {
            tracing::warn!("Using fake TTS client, audio will not be synthesized");
            Some(Arc::new(FakeTtsClient::with_defaults()))
        }
        TtsProvider::Elevenlabs => {
            let Some(api_key) = config.tts.api_key.as_ref() else {
                tracing::warn!("API key not found. Set {} or tts.api_key", API_KEY_ENV);
                return None;
            };

            let client_config = ElevenLabsClientConfig::new(api_key.expose_secret())
                .with_base_url(&config.tts.base_url);
            match ElevenLabsClient::new(client_config) {
                Ok(client) => {
                    tracing::info!("ElevenLabs client initialized.");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::error!("Error initializing ElevenLabs client: {}", e);
                    None
                }
            }
        }
    }
}

//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态，进程启动时构建一次

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GenerateAudioHandler,
    // Query handlers
    GetPageContentHandler, ListStoriesHandler,
    // Ports
    SpeechSynthesizerPort, StoryCatalogPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub generate_audio_handler: GenerateAudioHandler,

    // ========== Query Handlers ==========
    pub list_stories_handler: ListStoriesHandler,
    pub get_page_content_handler: GetPageContentHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// - `image_base_url`: 封面图片 URL 前缀，如 `/static/images`
    /// - `synthesizer`: 为 None 时语音合成接口始终返回未初始化错误
    pub fn new(
        catalog: Arc<dyn StoryCatalogPort>,
        image_base_url: impl Into<String>,
        synthesizer: Option<Arc<dyn SpeechSynthesizerPort>>,
    ) -> Self {
        Self {
            generate_audio_handler: GenerateAudioHandler::new(synthesizer),
            list_stories_handler: ListStoriesHandler::new(catalog.clone(), image_base_url),
            get_page_content_handler: GetPageContentHandler::new(catalog),
        }
    }
}

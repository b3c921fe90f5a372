//! HTTP Routes
//!
//! API Endpoints:
//! - /get_all_stories    GET   列出所有故事
//! - /get_page_content   POST  获取故事指定页文本
//! - /generate_audio     POST  文本转语音（audio/mpeg）
//! - /ping               GET   健康检查
//!
//! 首页和静态资源在 [`super::server::HttpServer`] 中挂载

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有 API 路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/get_all_stories", get(handlers::get_all_stories))
        .route("/get_page_content", post(handlers::get_page_content))
        .route("/generate_audio", post(handlers::generate_audio))
}

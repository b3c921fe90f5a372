//! Audio HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateAudio;
use crate::infrastructure::http::dto::GenerateAudioRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 文本转语音，返回完整的 MP3 数据（inline）
pub async fn generate_audio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateAudioRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let audio = state
        .generate_audio_handler
        .handle(GenerateAudio { text: req.text })
        .await?;

    let content_length = audio.audio_data.len().to_string();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, audio.content_type.to_string()),
            (header::CONTENT_DISPOSITION, "inline".to_string()),
            (header::CONTENT_LENGTH, content_length),
        ],
        audio.audio_data,
    )
        .into_response())
}

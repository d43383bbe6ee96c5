use super::dto::{GenerateVoiceRequest, VoiceStageResponse};
use super::service::VoiceService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::infrastructure::tts::client::TtsError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;
use validator::Validate;

/// Synthesize narration audio for a piece of text
#[utoipa::path(
    post,
    path = "/api/v1/videos/voice",
    request_body = GenerateVoiceRequest,
    responses(
        (status = 200, description = "Audio as a base64 data URI", body = ApiResponse<VoiceStageResponse>),
        (status = 400, description = "Missing text"),
        (status = 500, description = "TTS failure")
    ),
    tag = "Videos"
)]
pub async fn generate_voice(
    State(state): State<AppState>,
    Json(payload): Json<GenerateVoiceRequest>,
) -> impl IntoResponse {
    if payload.validate().is_err() {
        return ApiError("Text is required".to_string(), StatusCode::BAD_REQUEST).into_response();
    }

    match VoiceService::generate(&state.tts, &payload.text, payload.voice_id.as_deref()).await {
        Ok(audio_url) => ApiSuccess(
            ApiResponse::success(VoiceStageResponse { audio_url }),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => {
            error!("Voice generation failed: {}", e);
            let message = match &e {
                TtsError::NotConfigured => "TTS endpoint is not configured",
                _ => "Failed to generate voice",
            };
            ApiError(message.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

use super::dto::{GenerateScriptRequest, ScriptStageResponse};
use super::service::{ScriptError, ScriptService};
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::common::session::ensure_session;
use crate::infrastructure::llm::openrouter::LlmError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;
use tracing::error;
use validator::Validate;

/// Generate a video script from a subject and summary
#[utoipa::path(
    post,
    path = "/api/v1/videos/script",
    request_body = GenerateScriptRequest,
    responses(
        (status = 200, description = "Generated script", body = ApiResponse<ScriptStageResponse>),
        (status = 400, description = "Missing subject or summary"),
        (status = 500, description = "Provider or parsing failure")
    ),
    tag = "Videos"
)]
pub async fn generate_script(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<GenerateScriptRequest>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return ApiError(validation_message(&errors), StatusCode::BAD_REQUEST).into_response();
    }

    let session_id = ensure_session(&cookies);

    match ScriptService::generate(&state.llm, &payload).await {
        Ok(script) => ApiSuccess(
            ApiResponse::success(ScriptStageResponse { script, session_id }),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => {
            error!("Script generation failed: {}", e);
            let message = match &e {
                ScriptError::Llm(LlmError::NotConfigured) => {
                    "OpenRouter API key is not configured"
                }
                ScriptError::Llm(_) => "Failed to call the language model",
                ScriptError::Parse(_) | ScriptError::Shape(_) => {
                    "Failed to parse the generated script"
                }
            };
            ApiError(message.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}

use super::dto::{
    GenerateImagesRequest, ImageStageResponse, RegenerateSegmentRequest,
    RegenerateSegmentResponse,
};
use super::service::ImageService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::common::session::ensure_session;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tokio_util::sync::CancellationToken;
use tower_cookies::Cookies;
use validator::Validate;

/// Generate an illustrative image for every script segment
#[utoipa::path(
    post,
    path = "/api/v1/videos/images",
    request_body = GenerateImagesRequest,
    responses(
        (status = 200, description = "Script with image URLs and per-segment results", body = ApiResponse<ImageStageResponse>)
    ),
    tag = "Videos"
)]
pub async fn generate_images(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<GenerateImagesRequest>,
) -> impl IntoResponse {
    ensure_session(&cookies);

    let mut script = payload.script;
    let cancel = CancellationToken::new();

    let image_results = ImageService::generate_for_script(&state, &mut script, &cancel).await;

    // Per-segment failures are reported inside image_results; the stage
    // itself still succeeds with whatever could be generated.
    ApiSuccess(
        ApiResponse::success(ImageStageResponse {
            script,
            image_results,
        }),
        StatusCode::OK,
    )
    .into_response()
}

/// Regenerate the image for a single segment
#[utoipa::path(
    post,
    path = "/api/v1/videos/images/segment",
    request_body = RegenerateSegmentRequest,
    responses(
        (status = 200, description = "Result for the one regenerated segment", body = ApiResponse<RegenerateSegmentResponse>),
        (status = 400, description = "Missing image description")
    ),
    tag = "Videos"
)]
pub async fn regenerate_segment_image(
    State(state): State<AppState>,
    Json(payload): Json<RegenerateSegmentRequest>,
) -> impl IntoResponse {
    if payload.validate().is_err() {
        return ApiError(
            "Image description is required".to_string(),
            StatusCode::BAD_REQUEST,
        )
        .into_response();
    }

    let cancel = CancellationToken::new();
    let result = ImageService::regenerate_segment(
        &state,
        payload.index,
        &payload.image_description,
        &cancel,
    )
    .await;

    ApiSuccess(
        ApiResponse::success(RegenerateSegmentResponse { result }),
        StatusCode::OK,
    )
    .into_response()
}

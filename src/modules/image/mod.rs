use crate::state::AppState;
use axum::routing::post;
use axum::Router;

pub mod dto;
pub mod handler;
pub mod pipeline;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", post(handler::generate_images))
        .route("/images/segment", post(handler::regenerate_segment_image))
}

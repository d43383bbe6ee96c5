use crate::state::AppState;
use axum::routing::post;
use axum::Router;

pub mod dto;
pub mod extract;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/script", post(handler::generate_script))
}

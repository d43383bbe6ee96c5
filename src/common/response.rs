use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: `{"success": true, ...payload}`.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope: `{"success": false, "error": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<ApiResponse<T>>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (response, status) = (self.0, self.1);
        (status, Json(response)).into_response()
    }
}

pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        let response = ErrorResponse {
            success: false,
            error: message,
        };
        (status, Json(response)).into_response()
    }
}

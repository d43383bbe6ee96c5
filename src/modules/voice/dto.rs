use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateVoiceRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[serde(default)]
    pub voice_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoiceStageResponse {
    pub audio_url: String,
}

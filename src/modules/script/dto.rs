use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::model::Script;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateScriptRequest {
    #[validate(length(min = 1, message = "Subject and content summary are required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Subject and content summary are required"))]
    pub summary: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScriptStageResponse {
    pub script: Script,
    pub session_id: String,
}

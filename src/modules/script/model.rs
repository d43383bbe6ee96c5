use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated video script. Later stages attach artifact URLs to the
/// segments in place; segment order never changes within a request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Script {
    pub title: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// One narration + visual unit, identified by its position in the script.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Segment {
    /// Narration text.
    pub script: String,
    /// Prompt for the illustrative image.
    pub image_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

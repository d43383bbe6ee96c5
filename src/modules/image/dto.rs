use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::image_job::client::GeneratedImage;
use crate::modules::script::model::Script;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateImagesRequest {
    pub script: Script,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageStageResponse {
    pub script: Script,
    pub image_results: Vec<SegmentImageResult>,
}

/// Per-segment outcome record. The batch always carries exactly one of
/// these per input segment, in segment order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SegmentImageResult {
    pub index: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SegmentImageResult {
    pub fn from_outcome(index: usize, outcome: &GeneratedImage) -> Self {
        if outcome.is_success() {
            let url = outcome.url().to_string();
            Self {
                index,
                success: true,
                image_path: Some(url.clone()),
                direct_image_url: Some(url),
                error: None,
            }
        } else {
            Self {
                index,
                success: false,
                image_path: None,
                direct_image_url: None,
                error: outcome.error().map(|e| e.to_string()),
            }
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegenerateSegmentRequest {
    pub index: usize,
    #[validate(length(min = 1, message = "Image description is required"))]
    pub image_description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegenerateSegmentResponse {
    pub result: SegmentImageResult,
}

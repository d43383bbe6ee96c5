use super::client::{GenerationError, ImageJobProvider, JobSpec, JobState, JobStatus};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

// Fixed model/style parameters for the diffusion stage.
const SD_MODEL: &str = "770694094415489962";
const SD_VAE: &str = "sdxl-vae-fp16-fix.safetensors";
const SAMPLER: &str = "Euler a";
const LORA_MODELS: [&str; 3] = [
    "766419665653268679",
    "777630084346589138",
    "776587863287492519",
];

/// TensorArt job API: submission returns a job id, results are fetched by
/// polling `/v1/jobs/{id}`.
#[derive(Debug, Clone)]
pub struct TensorArtProvider {
    http: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    job: SubmittedJob,
}

#[derive(Debug, Deserialize)]
struct SubmittedJob {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    job: JobBody,
}

#[derive(Debug, Deserialize)]
struct JobBody {
    status: JobStatus,
    #[serde(rename = "successInfo")]
    success_info: Option<SuccessInfo>,
}

#[derive(Debug, Deserialize)]
struct SuccessInfo {
    images: Option<Vec<JobImage>>,
}

#[derive(Debug, Deserialize)]
struct JobImage {
    url: String,
}

impl TensorArtProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key,
            base_url,
        }
    }

    fn job_payload(spec: &JobSpec) -> serde_json::Value {
        let lora_items: Vec<serde_json::Value> = LORA_MODELS
            .iter()
            .map(|model| json!({ "loraModel": model, "weight": 0.7 }))
            .collect();

        json!({
            "request_id": Uuid::new_v4().as_simple().to_string(),
            "stages": [
                {
                    "type": "INPUT_INITIALIZE",
                    "inputInitialize": { "seed": -1, "count": 1 }
                },
                {
                    "type": "DIFFUSION",
                    "diffusion": {
                        "width": spec.width,
                        "height": spec.height,
                        "prompts": [{ "text": spec.prompt }],
                        "negativePrompts": [{ "text": "nsfw" }],
                        "sdModel": SD_MODEL,
                        "sdVae": SD_VAE,
                        "sampler": SAMPLER,
                        "steps": 20,
                        "cfgScale": 3,
                        "clipSkip": 1,
                        "etaNoiseSeedDelta": 31337,
                        "lora": { "items": lora_items }
                    }
                }
            ]
        })
    }
}

#[async_trait]
impl ImageJobProvider for TensorArtProvider {
    async fn submit(&self, spec: &JobSpec) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(format!("{}/v1/jobs", self.base_url))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&Self::job_payload(spec))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Submit(format!(
                "API error: {} - {}",
                status, error_text
            )));
        }

        let submitted: SubmitResponse = response.json().await?;
        Ok(submitted.job.id)
    }

    async fn status(&self, job_id: &str) -> Result<JobState, GenerationError> {
        let response = self
            .http
            .get(format!("{}/v1/jobs/{}", self.base_url, job_id))
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Transport(format!(
                "status query failed: {} - {}",
                status, error_text
            )));
        }

        let body: StatusResponse = response.json().await?;

        let result_url = body
            .job
            .success_info
            .and_then(|info| info.images)
            .and_then(|images| images.into_iter().next())
            .map(|image| image.url);

        Ok(JobState {
            status: body.job.status,
            result_url,
        })
    }
}

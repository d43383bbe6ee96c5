use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("TTS endpoint is not configured")]
    NotConfigured,

    #[error("TTS API error: {0}")]
    Api(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Synchronous text-to-speech call: one request, binary audio back.
#[derive(Debug, Clone)]
pub struct TtsClient {
    http: Client,
    endpoint: Option<String>,
    api_key: Option<String>,
    default_voice: String,
}

impl TtsClient {
    pub fn new(endpoint: Option<String>, api_key: Option<String>, default_voice: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            endpoint,
            api_key,
            default_voice,
        }
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    pub async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, TtsError> {
        let endpoint = self.endpoint.as_deref().ok_or(TtsError::NotConfigured)?;

        let request_body = json!({
            "text": text,
            "voice": voice,
            "rate": "+0%",
            "pitch": "+0%",
        });

        let mut request = self.http.post(endpoint).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::Api(format!("{}: {}", status, error_text)));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

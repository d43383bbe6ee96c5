use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const REFERER_HEADER: &str = "https://vercel.com";
const TITLE_HEADER: &str = "Social Video Generator";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OpenRouter API key is not configured")]
    NotConfigured,

    #[error("OpenRouter API error: {0}")]
    Api(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model reply carried no content")]
    EmptyReply,
}

/// Chat-completion client against an OpenRouter-compatible endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, base_url: String, model: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key,
            base_url,
            model,
        }
    }

    /// Sends one system+user exchange and returns the raw reply text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            "temperature": 0.7,
            "max_tokens": 2000,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", REFERER_HEADER)
            .header("X-Title", TITLE_HEADER)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{}: {}", status, error_text)));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyReply)?;

        info!("Model reply received ({} chars)", content.len());
        Ok(content)
    }
}

use serde::Deserialize;
use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub openrouter_api_key: Option<String>,
    pub llm_model: String,
    pub llm_base_url: String,
    pub tensorart_api_key: Option<String>,
    pub tensorart_base_url: String,
    pub image_poll_interval_secs: u64,
    pub image_poll_max_wait_secs: u64,
    pub image_concurrency: usize,
    pub tts_endpoint: Option<String>,
    pub tts_api_key: Option<String>,
    pub tts_default_voice: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            openrouter_api_key: env::get_opt(EnvKey::OpenRouterApiKey),
            llm_model: env::get_or(EnvKey::LlmModel, "meta-llama/llama-4-scout:free"),
            llm_base_url: env::get_or(EnvKey::LlmBaseUrl, "https://openrouter.ai/api/v1"),
            tensorart_api_key: env::get_opt(EnvKey::TensorArtApiKey),
            tensorart_base_url: env::get_or(
                EnvKey::TensorArtBaseUrl,
                "https://ap-east-1.tensorart.cloud",
            ),
            image_poll_interval_secs: env::get_parsed(EnvKey::ImagePollIntervalSecs, 10),
            image_poll_max_wait_secs: env::get_parsed(EnvKey::ImagePollMaxWaitSecs, 300),
            image_concurrency: env::get_parsed(EnvKey::ImageConcurrency, 2),
            tts_endpoint: env::get_opt(EnvKey::TtsEndpoint),
            tts_api_key: env::get_opt(EnvKey::TtsApiKey),
            tts_default_voice: env::get_or(EnvKey::TtsDefaultVoice, "en-US-JennyNeural"),
        }
    }
}

use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    OpenRouterApiKey,
    LlmModel,
    LlmBaseUrl,
    TensorArtApiKey,
    TensorArtBaseUrl,
    ImagePollIntervalSecs,
    ImagePollMaxWaitSecs,
    ImageConcurrency,
    TtsEndpoint,
    TtsApiKey,
    TtsDefaultVoice,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::OpenRouterApiKey => "OPENROUTER_API_KEY",
            EnvKey::LlmModel => "LLM_MODEL",
            EnvKey::LlmBaseUrl => "LLM_BASE_URL",
            EnvKey::TensorArtApiKey => "TENSORART_API_KEY",
            EnvKey::TensorArtBaseUrl => "TENSORART_BASE_URL",
            EnvKey::ImagePollIntervalSecs => "IMAGE_POLL_INTERVAL_SECS",
            EnvKey::ImagePollMaxWaitSecs => "IMAGE_POLL_MAX_WAIT_SECS",
            EnvKey::ImageConcurrency => "IMAGE_CONCURRENCY",
            EnvKey::TtsEndpoint => "TTS_ENDPOINT",
            EnvKey::TtsApiKey => "TTS_API_KEY",
            EnvKey::TtsDefaultVoice => "TTS_DEFAULT_VOICE",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

// Empty strings count as unset so a blank line in .env doesn't enable a provider.
pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str()).ok().filter(|v| !v.is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

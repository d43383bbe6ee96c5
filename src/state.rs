use crate::config::settings::AppConfig;
use crate::infrastructure::image_job::client::{ImageJobClient, ImageJobProvider, PollPolicy};
use crate::infrastructure::image_job::tensor_art::TensorArtProvider;
use crate::infrastructure::llm::openrouter::LlmClient;
use crate::infrastructure::tts::client::TtsClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub llm: LlmClient,
    pub image_jobs: ImageJobClient,
    pub tts: TtsClient,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        llm: LlmClient,
        image_jobs: ImageJobClient,
        tts: TtsClient,
    ) -> Self {
        Self {
            config,
            llm,
            image_jobs,
            tts,
        }
    }

    /// Wires provider clients straight from configuration. A missing
    /// TensorArt key leaves the image client unconfigured, which makes it
    /// synthesize placeholders instead of calling the provider.
    pub fn from_config(config: AppConfig) -> Self {
        let llm = LlmClient::new(
            config.openrouter_api_key.clone(),
            config.llm_base_url.clone(),
            config.llm_model.clone(),
        );

        let provider = config.tensorart_api_key.clone().map(|key| {
            Arc::new(TensorArtProvider::new(
                key,
                config.tensorart_base_url.clone(),
            )) as Arc<dyn ImageJobProvider>
        });
        let image_jobs = ImageJobClient::new(
            provider,
            PollPolicy::from_secs(
                config.image_poll_interval_secs,
                config.image_poll_max_wait_secs,
            ),
        );

        let tts = TtsClient::new(
            config.tts_endpoint.clone(),
            config.tts_api_key.clone(),
            config.tts_default_voice.clone(),
        );

        Self::new(config, llm, image_jobs, tts)
    }
}

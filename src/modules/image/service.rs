use super::dto::SegmentImageResult;
use super::pipeline;
use crate::modules::script::model::Script;
use crate::state::AppState;
use tokio_util::sync::CancellationToken;

pub const IMAGE_WIDTH: u32 = 1024;
pub const IMAGE_HEIGHT: u32 = 1024;

pub struct ImageService;

impl ImageService {
    /// Generates an image for every segment, mutating the script in place.
    pub async fn generate_for_script(
        state: &AppState,
        script: &mut Script,
        cancel: &CancellationToken,
    ) -> Vec<SegmentImageResult> {
        let client = state.image_jobs.clone();

        pipeline::run_batch(
            script,
            state.config.image_concurrency,
            move |_index, prompt| {
                let client = client.clone();
                let cancel = cancel.clone();
                async move {
                    client
                        .generate(&prompt, IMAGE_WIDTH, IMAGE_HEIGHT, &cancel)
                        .await
                }
            },
        )
        .await
    }

    /// Regenerates a single segment's image without touching any script.
    pub async fn regenerate_segment(
        state: &AppState,
        index: usize,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> SegmentImageResult {
        let outcome = state
            .image_jobs
            .generate(prompt, IMAGE_WIDTH, IMAGE_HEIGHT, cancel)
            .await;

        SegmentImageResult::from_outcome(index, &outcome)
    }
}

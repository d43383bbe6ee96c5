use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Job submission failed: {0}")]
    Submit(String),

    #[error("Job failed. Please try again with different settings")]
    JobFailed,

    #[error("Output is missing in the job response")]
    MissingOutput,

    #[error("Job timed out after {0} seconds")]
    Timeout(u64),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Generation cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        GenerationError::Transport(e.to_string())
    }
}

/// Provider-side job status. Anything the provider reports that is not a
/// terminal state keeps the poll loop going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(other)]
    Other,
}

/// One status observation of a submitted job.
#[derive(Debug, Clone)]
pub struct JobState {
    pub status: JobStatus,
    pub result_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JobSpec {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
}

#[async_trait]
pub trait ImageJobProvider: Send + Sync {
    /// Submits a generation job and returns the provider's job id.
    async fn submit(&self, spec: &JobSpec) -> Result<String, GenerationError>;

    /// Queries the current state of a submitted job.
    async fn status(&self, job_id: &str) -> Result<JobState, GenerationError>;
}

/// Fixed-interval polling bounded by wall-clock time since submission.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl PollPolicy {
    pub fn from_secs(interval: u64, max_wait: u64) -> Self {
        Self {
            interval: Duration::from_secs(interval),
            max_wait: Duration::from_secs(max_wait),
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from_secs(10, 300)
    }
}

/// Outcome of one generation attempt. Every failure path still yields a
/// usable placeholder URL so the batch stays non-blocking.
#[derive(Debug)]
pub enum GeneratedImage {
    /// The provider produced a real output URL.
    Ready { url: String },
    /// Provider unconfigured: placeholder synthesized without network I/O.
    Stub { url: String },
    /// Generation failed; `url` is a placeholder.
    Degraded {
        url: String,
        error: GenerationError,
    },
}

impl GeneratedImage {
    pub fn url(&self) -> &str {
        match self {
            GeneratedImage::Ready { url }
            | GeneratedImage::Stub { url }
            | GeneratedImage::Degraded { url, .. } => url,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            GeneratedImage::Degraded { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, GeneratedImage::Degraded { .. })
    }
}

/// Submits a job to an asynchronous image provider and polls until a
/// terminal state, the wall-clock ceiling, or cancellation. Never returns
/// an error to its caller.
#[derive(Clone)]
pub struct ImageJobClient {
    provider: Option<Arc<dyn ImageJobProvider>>,
    policy: PollPolicy,
}

impl ImageJobClient {
    pub fn new(provider: Option<Arc<dyn ImageJobProvider>>, policy: PollPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn placeholder_url(prompt: &str, width: u32, height: u32) -> String {
        let preview: String = prompt.chars().take(30).collect();
        let encoded: String = url::form_urlencoded::byte_serialize(preview.as_bytes()).collect();
        format!(
            "/placeholder.svg?height={}&width={}&text={}",
            height, width, encoded
        )
    }

    pub async fn generate(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        cancel: &CancellationToken,
    ) -> GeneratedImage {
        let placeholder = Self::placeholder_url(prompt, width, height);

        let Some(provider) = &self.provider else {
            info!("Image provider not configured, using placeholder");
            return GeneratedImage::Stub { url: placeholder };
        };

        let spec = JobSpec {
            prompt: prompt.to_string(),
            width,
            height,
        };

        match self.run_job(provider.as_ref(), &spec, cancel).await {
            Ok(url) => GeneratedImage::Ready { url },
            Err(error) => {
                warn!("Image generation degraded to placeholder: {}", error);
                GeneratedImage::Degraded {
                    url: placeholder,
                    error,
                }
            }
        }
    }

    async fn run_job(
        &self,
        provider: &dyn ImageJobProvider,
        spec: &JobSpec,
        cancel: &CancellationToken,
    ) -> Result<String, GenerationError> {
        let job_id = provider.submit(spec).await?;
        info!("Image job submitted, id: {}", job_id);

        let submitted_at = Instant::now();

        loop {
            tokio::select! {
                _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
                _ = tokio::time::sleep(self.policy.interval) => {}
            }

            if submitted_at.elapsed() > self.policy.max_wait {
                return Err(GenerationError::Timeout(self.policy.max_wait.as_secs()));
            }

            let state = provider.status(&job_id).await?;

            match state.status {
                JobStatus::Success => {
                    return state.result_url.ok_or(GenerationError::MissingOutput);
                }
                JobStatus::Failed => return Err(GenerationError::JobFailed),
                other => info!("Image job {} status: {:?}", job_id, other),
            }
        }
    }
}

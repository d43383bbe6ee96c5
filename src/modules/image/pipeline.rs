use super::dto::SegmentImageResult;
use crate::infrastructure::image_job::client::GeneratedImage;
use crate::modules::script::model::Script;
use futures_util::stream::{self, StreamExt};
use std::future::Future;
use tracing::warn;

/// Attempts generation for every segment of the script and returns one
/// result record per segment, in segment order.
///
/// Successful segments get both URL fields set in place; failed segments
/// are left untouched and recorded with their error. A single failure
/// never aborts the batch. `buffered` keeps output order equal to input
/// order, so results stay index-stable whatever the completion order.
pub async fn run_batch<F, Fut>(
    script: &mut Script,
    concurrency: usize,
    generate: F,
) -> Vec<SegmentImageResult>
where
    F: Fn(usize, String) -> Fut,
    Fut: Future<Output = GeneratedImage>,
{
    let prompts: Vec<(usize, String)> = script
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| (index, segment.image_description.clone()))
        .collect();

    let outcomes: Vec<(usize, GeneratedImage)> = stream::iter(prompts)
        .map(|(index, prompt)| {
            let fut = generate(index, prompt);
            async move { (index, fut.await) }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut results = Vec::with_capacity(outcomes.len());

    for (index, outcome) in outcomes {
        if !outcome.is_success() {
            warn!(
                "Error generating image for segment {}: {}",
                index + 1,
                outcome
                    .error()
                    .map(|e| e.to_string())
                    .unwrap_or_default()
            );
        } else {
            let url = outcome.url().to_string();
            let segment = &mut script.segments[index];
            segment.image_path = Some(url.clone());
            segment.direct_image_url = Some(url);
        }
        results.push(SegmentImageResult::from_outcome(index, &outcome));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::image_job::client::GenerationError;
    use crate::modules::script::model::Segment;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn script_with(n: usize) -> Script {
        Script {
            title: "Test".to_string(),
            segments: (0..n)
                .map(|i| Segment {
                    script: format!("narration {i}"),
                    image_description: format!("prompt {i}"),
                    image_path: None,
                    direct_image_url: None,
                    audio_url: None,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn attaches_urls_and_records_success_per_segment() {
        let mut script = script_with(3);

        let results = run_batch(&mut script, 1, |index, _prompt| async move {
            GeneratedImage::Ready {
                url: format!("https://cdn.example/{index}.png"),
            }
        })
        .await;

        assert_eq!(results.len(), 3);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.index, i);
            assert!(result.success);
            assert_eq!(
                result.image_path.as_deref(),
                Some(format!("https://cdn.example/{i}.png").as_str())
            );
            assert_eq!(result.image_path, result.direct_image_url);
        }
        assert_eq!(
            script.segments[2].direct_image_url.as_deref(),
            Some("https://cdn.example/2.png")
        );
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_later_segments() {
        let mut script = script_with(3);
        let attempted = Arc::new(Mutex::new(Vec::new()));

        let seen = attempted.clone();
        let results = run_batch(&mut script, 1, move |index, prompt| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(index);
                if index == 1 {
                    GeneratedImage::Degraded {
                        url: "/placeholder.svg?text=x".to_string(),
                        error: GenerationError::JobFailed,
                    }
                } else {
                    GeneratedImage::Ready {
                        url: format!("https://cdn.example/{prompt}.png"),
                    }
                }
            }
        })
        .await;

        assert_eq!(*attempted.lock().unwrap(), vec![0, 1, 2]);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[1].error.as_deref().unwrap().contains("Job failed"));
        assert!(results[2].success);
        // Failed segment keeps its artifact fields unset.
        assert!(script.segments[1].image_path.is_none());
        assert!(script.segments[2].image_path.is_some());
    }

    #[tokio::test]
    async fn always_failing_provider_still_yields_full_batch() {
        let mut script = script_with(4);

        let results = run_batch(&mut script, 2, |_index, prompt| async move {
            GeneratedImage::Degraded {
                url: format!("/placeholder.svg?text={prompt}"),
                error: GenerationError::Timeout(300),
            }
        })
        .await;

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.success));
        assert!(results.iter().all(|r| r.error.is_some()));
        assert_eq!(script.segments.len(), 4);
        assert!(script.segments.iter().all(|s| s.image_path.is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_batch_keeps_index_order() {
        let mut script = script_with(4);

        // Later segments finish first; the result order must not change.
        let results = run_batch(&mut script, 4, |index, _prompt| async move {
            tokio::time::sleep(Duration::from_millis(100 - (index as u64) * 20)).await;
            GeneratedImage::Ready {
                url: format!("https://cdn.example/{index}.png"),
            }
        })
        .await;

        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(
            script.segments[0].image_path.as_deref(),
            Some("https://cdn.example/0.png")
        );
    }

    #[tokio::test]
    async fn empty_script_yields_empty_batch() {
        let mut script = script_with(0);
        let results = run_batch(&mut script, 2, |_i, _p| async move {
            GeneratedImage::Stub {
                url: "/placeholder.svg".to_string(),
            }
        })
        .await;
        assert!(results.is_empty());
    }
}

use super::dto::GenerateScriptRequest;
use super::extract::{self, ExtractError};
use super::model::Script;
use crate::infrastructure::llm::openrouter::{LlmClient, LlmError};
use thiserror::Error;
use tracing::info;

const SYSTEM_PROMPT: &str = "You are an expert scriptwriter for short social-media videos.";

const DEFAULT_DURATION: &str = "under one minute";
const DEFAULT_PLATFORM: &str = "a short-video platform";

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] ExtractError),

    #[error("Script JSON does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

pub struct ScriptService;

impl ScriptService {
    pub async fn generate(
        llm: &LlmClient,
        req: &GenerateScriptRequest,
    ) -> Result<Script, ScriptError> {
        let prompt = Self::build_prompt(
            &req.subject,
            &req.summary,
            req.duration.as_deref().unwrap_or(DEFAULT_DURATION),
            req.platform.as_deref().unwrap_or(DEFAULT_PLATFORM),
        );

        let reply = llm.complete(SYSTEM_PROMPT, &prompt).await?;
        let script = Self::parse_script(&reply)?;

        info!(
            "Generated script \"{}\" with {} segments",
            script.title,
            script.segments.len()
        );
        Ok(script)
    }

    pub fn build_prompt(subject: &str, summary: &str, duration: &str, platform: &str) -> String {
        format!(
            r#"Write a video script for the social platform {platform} about: {subject}.

Content summary: {summary}
Desired video length: {duration}

Split the script into clear segments. Each segment must contain:
1. The narration text
2. A detailed description of an illustrative image matching the narration

Return the result as JSON with exactly this structure:
{{
    "title": "Video title",
    "segments": [
        {{
            "script": "Narration for segment 1",
            "image_description": "Detailed illustrative image description for segment 1"
        }},
        ...
    ]
}}"#
        )
    }

    pub fn parse_script(reply: &str) -> Result<Script, ScriptError> {
        let value = extract::extract_json(reply)?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_reply_into_script() {
        let reply = r#"Here you go:
```json
{
  "title": "Brewing Basics",
  "segments": [
    {"script": "Start with fresh beans.", "image_description": "Close-up of coffee beans"},
    {"script": "Grind just before brewing.", "image_description": "A burr grinder in action"}
  ]
}
```"#;

        let script = ScriptService::parse_script(reply).unwrap();
        assert_eq!(script.title, "Brewing Basics");
        assert_eq!(script.segments.len(), 2);
        assert_eq!(script.segments[0].script, "Start with fresh beans.");
        assert_eq!(
            script.segments[1].image_description,
            "A burr grinder in action"
        );
        assert!(script.segments[0].image_path.is_none());
    }

    #[test]
    fn wrong_shape_is_a_shape_error() {
        let reply = r#"{"title": 42, "segments": "nope"}"#;
        let err = ScriptService::parse_script(reply).unwrap_err();
        assert!(matches!(err, ScriptError::Shape(_)));
    }

    #[test]
    fn prompt_embeds_all_request_fields() {
        let prompt = ScriptService::build_prompt("coffee", "brewing method", "1-2 phút", "TikTok");
        assert!(prompt.contains("coffee"));
        assert!(prompt.contains("brewing method"));
        assert!(prompt.contains("1-2 phút"));
        assert!(prompt.contains("TikTok"));
        assert!(prompt.contains("image_description"));
    }
}

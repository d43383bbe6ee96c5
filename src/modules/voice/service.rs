use crate::infrastructure::tts::client::{TtsClient, TtsError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub struct VoiceService;

impl VoiceService {
    /// Synthesizes narration audio and returns it as a data URI, ready to
    /// feed an `<audio>` element directly.
    pub async fn generate(
        tts: &TtsClient,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<String, TtsError> {
        let voice = voice_id.unwrap_or_else(|| tts.default_voice());
        let audio = tts.synthesize(text, voice).await?;
        Ok(Self::audio_data_uri(&audio))
    }

    pub fn audio_data_uri(audio: &[u8]) -> String {
        format!("data:audio/mpeg;base64,{}", STANDARD.encode(audio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_audio_as_mpeg_data_uri() {
        assert_eq!(
            VoiceService::audio_data_uri(b"abc"),
            "data:audio/mpeg;base64,YWJj"
        );
    }

    #[test]
    fn empty_audio_is_an_empty_payload() {
        assert_eq!(VoiceService::audio_data_uri(b""), "data:audio/mpeg;base64,");
    }
}

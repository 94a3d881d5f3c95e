use std::path::Path;

use tokio::fs;

use crate::error::{ClipscoutError, Result};
use crate::types::Transcript;

/// Load a transcript from disk. `.json` files are parsed as whisper-style
/// transcripts (`{ text, segments, language }`); anything else is treated as
/// a flat transcript string with no timing, for which the engine later
/// synthesizes cues.
pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| ClipscoutError::TranscriptRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let transcript: Transcript = serde_json::from_str(&raw)?;
        return Ok(transcript);
    }

    Ok(Transcript {
        text: raw,
        segments: Vec::new(),
        language: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_input_parses_segments() {
        let dir = std::env::temp_dir().join("clipscout-source-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("transcript.json");
        tokio::fs::write(
            &path,
            r#"{"text": "hello there", "segments": [{"start": 0.0, "end": 2.0, "text": "hello there"}], "language": "en"}"#,
        )
        .await
        .unwrap();

        let transcript = load_transcript(&path).await.unwrap();
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.language, "en");
    }

    #[tokio::test]
    async fn plain_text_input_has_no_segments() {
        let dir = std::env::temp_dir().join("clipscout-source-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("transcript.txt");
        tokio::fs::write(&path, "Just a flat transcript. No timing at all.")
            .await
            .unwrap();

        let transcript = load_transcript(&path).await.unwrap();
        assert!(transcript.segments.is_empty());
        assert!(transcript.text.starts_with("Just a flat"));
    }

    #[tokio::test]
    async fn missing_file_reports_the_path() {
        let err = load_transcript(Path::new("/nonexistent/nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClipscoutError::TranscriptRead { .. }));
    }
}

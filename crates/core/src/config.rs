use serde::{Deserialize, Serialize};

/// Tunable parameters for clip discovery. Defaults target short-form video
/// platforms; load a JSON profile or override per call to change them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Windows shorter than this are never scored or returned.
    #[serde(default = "default_min_clip_secs")]
    pub min_clip_secs: f64,
    /// Windows longer than this are never scored or returned.
    #[serde(default = "default_max_clip_secs")]
    pub max_clip_secs: f64,
    /// Assumed speaking rate when timings must be synthesized from plain text.
    #[serde(default = "default_words_per_second")]
    pub words_per_second: f64,
    /// Synthesized sentences longer than this are re-chunked.
    #[serde(default = "default_max_sentence_words")]
    pub max_sentence_words: usize,
    /// Chunk size for punctuation-sparse transcripts.
    #[serde(default = "default_chunk_words")]
    pub chunk_words: usize,
    /// Windows starting within this many seconds of the video start get the
    /// position bonus.
    #[serde(default = "default_intro_window_secs")]
    pub intro_window_secs: f64,
    /// Minimum silence before a window for it to count as a topic shift.
    #[serde(default = "default_topic_gap_secs")]
    pub topic_gap_secs: f64,
}

fn default_min_clip_secs() -> f64 {
    15.0
}

fn default_max_clip_secs() -> f64 {
    60.0
}

fn default_words_per_second() -> f64 {
    2.5
}

fn default_max_sentence_words() -> usize {
    24
}

fn default_chunk_words() -> usize {
    12
}

fn default_intro_window_secs() -> f64 {
    15.0
}

fn default_topic_gap_secs() -> f64 {
    2.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_clip_secs: default_min_clip_secs(),
            max_clip_secs: default_max_clip_secs(),
            words_per_second: default_words_per_second(),
            max_sentence_words: default_max_sentence_words(),
            chunk_words: default_chunk_words(),
            intro_window_secs: default_intro_window_secs(),
            topic_gap_secs: default_topic_gap_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"min_clip_secs": 10.0, "max_clip_secs": 30.0}"#).unwrap();
        assert_eq!(config.min_clip_secs, 10.0);
        assert_eq!(config.max_clip_secs, 30.0);
        assert_eq!(config.words_per_second, 2.5);
        assert_eq!(config.chunk_words, 12);
    }
}

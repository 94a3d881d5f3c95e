use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default)]
    pub segments: Vec<TranscriptCue>,
    #[serde(default)]
    pub language: String,
}

/// One timed utterance. Field names match whisper-style transcript JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptCue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl TranscriptCue {
    /// Well-formed cues have non-blank text and a positive, finite duration.
    pub fn is_well_formed(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.end > self.start
            && !self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipCandidate {
    pub title: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub transcript_excerpt: String,
    /// 1-5, higher = stronger predicted engagement.
    pub hook_score: u8,
    pub reason: String,
    /// Filled by the enrichment stage, never by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl ClipCandidate {
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

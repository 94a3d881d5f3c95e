use crate::config::EngineConfig;
use crate::types::TranscriptCue;

/// One candidate time window, aligned to cue boundaries.
#[derive(Debug, Clone)]
pub struct CandidateWindow {
    /// Index of the first cue in the window.
    pub first_cue: usize,
    /// Index of the last cue in the window, inclusive.
    pub last_cue: usize,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

impl CandidateWindow {
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

/// Enumerate candidate windows: one per starting cue, extended cue-by-cue
/// until the next cue would push the duration past the upper bound, kept only
/// if the result clears the lower bound. At most one window per cue keeps the
/// candidate set O(number of cues).
pub fn enumerate_windows(cues: &[TranscriptCue], config: &EngineConfig) -> Vec<CandidateWindow> {
    let mut windows = Vec::new();
    for first in 0..cues.len() {
        let start = cues[first].start;
        let mut last = None;
        for (offset, cue) in cues[first..].iter().enumerate() {
            if cue.end - start > config.max_clip_secs {
                break;
            }
            last = Some(first + offset);
        }
        let Some(last) = last else { continue };
        let end = cues[last].end;
        if end - start >= config.min_clip_secs {
            windows.push(CandidateWindow {
                first_cue: first,
                last_cue: last,
                start_seconds: start,
                end_seconds: end,
            });
        }
    }
    windows
}

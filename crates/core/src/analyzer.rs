//! The clip-discovery entry point: normalize cues, enumerate windows, score
//! each one, then greedily select a non-overlapping, chronological subset.

use crate::config::EngineConfig;
use crate::hooks::{WindowContext, score_window};
use crate::normalize::normalize_cues;
use crate::types::{ClipCandidate, TranscriptCue};
use crate::window::enumerate_windows;

const TITLE_WORDS: usize = 8;

/// Identify up to `max_clips` non-overlapping clip candidates in a timed
/// transcript.
///
/// Pure and synchronous: no IO, no shared state, identical output for
/// identical input. The cue slice is read-only; returned candidates are owned
/// by the caller. Degenerate input (blank transcript, no usable cues,
/// `max_clips == 0`) yields an empty list rather than an error.
pub fn analyze_clips(
    transcript: &str,
    cues: &[TranscriptCue],
    max_clips: usize,
    config: &EngineConfig,
) -> Vec<ClipCandidate> {
    if max_clips == 0 {
        return Vec::new();
    }

    let cues = normalize_cues(transcript, cues, config);
    let windows = enumerate_windows(&cues, config);

    let mut scored: Vec<ClipCandidate> = windows
        .iter()
        .map(|window| {
            let excerpt = cues[window.first_cue..=window.last_cue]
                .iter()
                .map(|cue| cue.text.trim())
                .collect::<Vec<_>>()
                .join(" ");
            let gap_before = if window.first_cue == 0 {
                0.0
            } else {
                window.start_seconds - cues[window.first_cue - 1].end
            };
            let assessment = score_window(
                &WindowContext {
                    text: &excerpt,
                    start_seconds: window.start_seconds,
                    gap_before_seconds: gap_before,
                },
                config,
            );
            ClipCandidate {
                title: derive_title(&excerpt),
                start_seconds: window.start_seconds,
                end_seconds: window.end_seconds,
                transcript_excerpt: excerpt,
                hook_score: assessment.score,
                reason: assessment.reason,
                strategy: None,
            }
        })
        .collect();

    // Deterministic order: best score first, earlier start on ties, shorter
    // window as the final tie-break.
    scored.sort_by(|a, b| {
        b.hook_score
            .cmp(&a.hook_score)
            .then(a.start_seconds.total_cmp(&b.start_seconds))
            .then(a.end_seconds.total_cmp(&b.end_seconds))
    });

    let mut selected: Vec<ClipCandidate> = Vec::new();
    for candidate in scored {
        if selected.len() >= max_clips {
            break;
        }
        if selected.iter().all(|kept| !overlaps(kept, &candidate)) {
            selected.push(candidate);
        }
    }

    selected.sort_by(|a, b| a.start_seconds.total_cmp(&b.start_seconds));
    selected
}

/// Half-open interval intersection.
fn overlaps(a: &ClipCandidate, b: &ClipCandidate) -> bool {
    a.start_seconds < b.end_seconds && b.start_seconds < a.end_seconds
}

/// Placeholder title from the window's opening words; the enrichment stage
/// usually rewrites it.
fn derive_title(excerpt: &str) -> String {
    let words: Vec<&str> = excerpt.split_whitespace().collect();
    let mut title = words
        .iter()
        .take(TITLE_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(['.', ',', ';', ':'])
        .to_string();
    if words.len() > TITLE_WORDS {
        title.push('…');
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_clips_returns_nothing() {
        let cues = vec![TranscriptCue {
            start: 0.0,
            end: 30.0,
            text: "Why does this always happen to you?".to_string(),
        }];
        assert!(analyze_clips("", &cues, 0, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn empty_input_returns_nothing() {
        assert!(analyze_clips("", &[], 5, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn candidates_never_alias_the_input() {
        let cues = vec![TranscriptCue {
            start: 0.0,
            end: 30.0,
            text: "Why does this always happen to you?".to_string(),
        }];
        let before = cues.clone();
        let _ = analyze_clips("", &cues, 3, &EngineConfig::default());
        assert_eq!(cues.len(), before.len());
        assert_eq!(cues[0].text, before[0].text);
    }

    #[test]
    fn title_is_clipped_to_the_opening_words() {
        let title = derive_title("one two three four five six seven eight nine ten");
        assert_eq!(title, "one two three four five six seven eight…");
        assert_eq!(derive_title("short and sweet."), "short and sweet");
    }

    #[test]
    fn overlap_is_half_open() {
        let clip = |start: f64, end: f64| ClipCandidate {
            title: String::new(),
            start_seconds: start,
            end_seconds: end,
            transcript_excerpt: String::new(),
            hook_score: 1,
            reason: String::new(),
            strategy: None,
        };
        assert!(!overlaps(&clip(0.0, 40.0), &clip(40.0, 70.0)));
        assert!(overlaps(&clip(0.0, 41.0), &clip(40.0, 70.0)));
    }
}

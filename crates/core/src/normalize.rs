use crate::config::EngineConfig;
use crate::types::TranscriptCue;

/// Produce a uniform, time-ordered cue sequence regardless of whether the
/// caller supplied structured cues or only a flat transcript string.
///
/// Structured cues win when present; malformed ones (end before start, blank
/// text, non-finite times) are dropped rather than aborting the call. With no
/// cues at all, timings are synthesized from word counts at an assumed
/// speaking rate, which keeps them monotonically increasing by construction.
pub fn normalize_cues(
    transcript: &str,
    cues: &[TranscriptCue],
    config: &EngineConfig,
) -> Vec<TranscriptCue> {
    if !cues.is_empty() {
        return cues
            .iter()
            .filter(|cue| cue.is_well_formed())
            .cloned()
            .collect();
    }
    synthesize_cues(transcript, config)
}

fn synthesize_cues(transcript: &str, config: &EngineConfig) -> Vec<TranscriptCue> {
    let rate = if config.words_per_second > 0.0 {
        config.words_per_second
    } else {
        2.5
    };

    let mut cues = Vec::new();
    let mut elapsed_words = 0usize;
    for sentence in split_sentences(transcript) {
        for chunk in rechunk(&sentence, config.max_sentence_words, config.chunk_words) {
            let words = chunk.split_whitespace().count();
            if words == 0 {
                continue;
            }
            let start = elapsed_words as f64 / rate;
            elapsed_words += words;
            let end = elapsed_words as f64 / rate;
            cues.push(TranscriptCue {
                start,
                end,
                text: chunk,
            });
        }
    }
    cues
}

/// Split on sentence-terminal punctuation, keeping the terminator.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?' | '…') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}

/// Break overlong sentences into fixed word-count chunks. A transcript with no
/// punctuation arrives here as one giant sentence and gets the same treatment.
fn rechunk(sentence: &str, max_sentence_words: usize, chunk_words: usize) -> Vec<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= max_sentence_words.max(1) {
        return vec![sentence.to_string()];
    }
    words
        .chunks(chunk_words.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start: f64, end: f64, text: &str) -> TranscriptCue {
        TranscriptCue {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn structured_cues_pass_through() {
        let cues = vec![cue(0.0, 5.0, "first"), cue(5.0, 9.0, "second")];
        let normalized = normalize_cues("ignored", &cues, &EngineConfig::default());
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].text, "first");
    }

    #[test]
    fn malformed_cues_are_dropped_not_fatal() {
        let cues = vec![
            cue(0.0, 5.0, "good"),
            cue(7.0, 7.0, "zero duration"),
            cue(9.0, 8.0, "end before start"),
            cue(10.0, 12.0, "   "),
            cue(f64::NAN, 20.0, "nan start"),
            cue(20.0, 25.0, "also good"),
        ];
        let normalized = normalize_cues("", &cues, &EngineConfig::default());
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].text, "good");
        assert_eq!(normalized[1].text, "also good");
    }

    #[test]
    fn synthesized_timings_are_monotonic_and_non_overlapping() {
        let text = "This is the first sentence. And here comes another one! \
                    Finally a question to close things out?";
        let normalized = normalize_cues(text, &[], &EngineConfig::default());
        assert_eq!(normalized.len(), 3);
        for pair in normalized.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(normalized[0].start, 0.0);
        // 5 words at 2.5 words/sec = 2 seconds.
        assert!((normalized[0].end - 2.0).abs() < 1e-9);
    }

    #[test]
    fn punctuation_sparse_text_falls_back_to_word_chunks() {
        let text = "word ".repeat(100);
        let config = EngineConfig::default();
        let normalized = normalize_cues(&text, &[], &config);
        assert!(normalized.len() > 1);
        for cue in &normalized {
            assert!(cue.text.split_whitespace().count() <= config.chunk_words);
        }
    }

    #[test]
    fn blank_transcript_yields_no_cues() {
        assert!(normalize_cues("", &[], &EngineConfig::default()).is_empty());
        assert!(normalize_cues("   \n  ", &[], &EngineConfig::default()).is_empty());
    }
}

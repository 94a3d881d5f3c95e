//! Hook-strength heuristics for candidate windows.
//!
//! Scoring is additive over independent one-shot detectors; the running point
//! total maps onto the 1-5 scale by fixed thresholds. Lexicons and weights are
//! a tuned policy, not a contract.

use crate::config::EngineConfig;

/// Everything the detectors need to know about one window.
pub struct WindowContext<'a> {
    pub text: &'a str,
    pub start_seconds: f64,
    /// Silence between the previous cue's end and this window's start.
    /// Zero for the very first cue.
    pub gap_before_seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HookAssessment {
    pub score: u8,
    pub reason: String,
}

const CURIOSITY_WORDS: &[&str] = &["how", "why"];
const CURIOSITY_PHRASES: &[&str] = &[
    "what happens",
    "what if",
    "ever wondered",
    "did you know",
    "the secret",
    "turns out",
];
const SUPERLATIVES: &[&str] = &[
    "best", "worst", "never", "always", "biggest", "greatest", "smallest", "only", "most",
    "least", "ultimate", "everyone", "nobody",
];
const EMOTION_WORDS: &[&str] = &[
    "insane",
    "crazy",
    "unbelievable",
    "shocking",
    "shocked",
    "amazing",
    "incredible",
    "terrifying",
    "scary",
    "stunning",
    "wild",
    "furious",
    "thrilled",
];
const ADDRESS_WORDS: &[&str] = &["you", "your", "you're", "yours", "yourself"];

const QUESTION_POINTS: u32 = 3;
const SUPERLATIVE_POINTS: u32 = 3;
const NUMERIC_POINTS: u32 = 2;
const EMOTION_POINTS: u32 = 2;
const ADDRESS_POINTS: u32 = 1;
const POSITION_POINTS: u32 = 1;

/// Score one window. Each detector contributes at most once so repeated
/// keywords cannot run the total up.
pub fn score_window(ctx: &WindowContext<'_>, config: &EngineConfig) -> HookAssessment {
    let lowered = ctx.text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|token| !token.is_empty())
        .collect();

    let mut points = 0u32;
    let mut signals: Vec<&'static str> = Vec::new();

    let has_question = lowered.contains('?')
        || tokens.iter().any(|t| CURIOSITY_WORDS.contains(t))
        || CURIOSITY_PHRASES.iter().any(|p| lowered.contains(p));
    if has_question {
        points += QUESTION_POINTS;
        signals.push("poses an open question");
    }

    if tokens.iter().any(|t| SUPERLATIVES.contains(t)) {
        points += SUPERLATIVE_POINTS;
        signals.push("makes a strong claim");
    }

    if lowered.chars().any(|c| c.is_ascii_digit()) {
        points += NUMERIC_POINTS;
        signals.push("cites a concrete number");
    }

    if lowered.contains('!') || tokens.iter().any(|t| EMOTION_WORDS.contains(t)) {
        points += EMOTION_POINTS;
        signals.push("emotionally charged language");
    }

    if tokens.iter().any(|t| ADDRESS_WORDS.contains(t)) {
        points += ADDRESS_POINTS;
        signals.push("speaks directly to the viewer");
    }

    if ctx.start_seconds <= config.intro_window_secs
        || ctx.gap_before_seconds >= config.topic_gap_secs
    {
        points += POSITION_POINTS;
        signals.push("sits at a natural entry point");
    }

    let reason = if signals.is_empty() {
        "no strong hook signals".to_string()
    } else {
        signals.join(", ")
    };

    HookAssessment {
        score: score_from_points(points),
        reason,
    }
}

fn score_from_points(points: u32) -> u8 {
    match points {
        8.. => 5,
        6..=7 => 4,
        4..=5 => 3,
        2..=3 => 2,
        _ => 1,
    }
}

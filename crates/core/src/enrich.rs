//! AI enrichment of discovered clips: rewrite titles and reasons, attach a
//! posting strategy. Clip boundaries and excerpts are produced by the engine
//! and are never changed here.

use serde::Deserialize;

use crate::error::{ClipscoutError, Result};
use crate::format::format_timestamp;
use crate::provider::Provider;
use crate::types::ClipCandidate;

static ENRICH_PROMPT: &str = r#"
  You are a short-form video strategist.

  INPUT: A numbered list of clip candidates cut from one video transcript.
  Each entry has a time range, a heuristic hook score, the signals that
  fired, and the transcript excerpt.

  TASK: For each candidate, write a scroll-stopping title, a one-sentence
  reason why the clip can stand alone, and a short posting strategy.

  OUTPUT: Return ONLY a valid JSON array:
  [
    {
      "index": 0,
      "title": "Punchy title under 60 characters",
      "reason": "Why this clip hooks a cold viewer",
      "strategy": "How and where to post it"
    }
  ]

  RULES:
  - "index" must echo the candidate's number from the input
  - Never invent content that is not in the excerpt
  - Titles must not be clickbait that the excerpt cannot pay off
  - Keep every field to a single sentence
"#;

#[derive(Debug, Deserialize)]
struct EnrichedEntry {
    index: usize,
    #[serde(default)]
    title: String,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    strategy: Option<String>,
}

/// Rewrite `title`/`reason` and attach `strategy` for each candidate using
/// the given provider. Returns a fresh list; the input is untouched.
pub async fn enrich_candidates(
    provider: &Provider,
    candidates: &[ClipCandidate],
    lang: &str,
) -> Result<Vec<ClipCandidate>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let user_prompt = build_user_prompt(candidates, lang);
    let content = provider.chat(ENRICH_PROMPT, &user_prompt).await?;
    let entries = parse_enrich_response(&content)?;
    Ok(apply_enrichment(candidates, &entries))
}

fn build_user_prompt(candidates: &[ClipCandidate], lang: &str) -> String {
    let mut prompt = format!(
        "Write all output in {lang}. Candidates:\n\n"
    );
    for (i, clip) in candidates.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. [{}–{}] hook {}/5 ({})\n{}\n\n",
            i,
            format_timestamp(clip.start_seconds),
            format_timestamp(clip.end_seconds),
            clip.hook_score,
            clip.reason,
            clip.transcript_excerpt
        ));
    }
    prompt
}

/// Parse the model's JSON array, tolerating prose around it.
fn parse_enrich_response(response: &str) -> Result<Vec<EnrichedEntry>> {
    let json_start = response.find('[');
    let json_end = response.rfind(']');

    match (json_start, json_end) {
        (Some(start), Some(end)) if end > start => {
            serde_json::from_str(&response[start..=end]).map_err(|e| {
                ClipscoutError::EnrichFailed {
                    reason: format!("Unparseable enrichment response: {e}\n\n{response}"),
                }
            })
        }
        _ => Err(ClipscoutError::EnrichFailed {
            reason: format!("No JSON array in enrichment response:\n{response}"),
        }),
    }
}

/// Copy rewritten text fields onto fresh candidates. Time fields and excerpts
/// carry over from the engine output; the response has no way to change them.
fn apply_enrichment(candidates: &[ClipCandidate], entries: &[EnrichedEntry]) -> Vec<ClipCandidate> {
    let mut enriched: Vec<ClipCandidate> = candidates.to_vec();
    for entry in entries {
        let Some(clip) = enriched.get_mut(entry.index) else {
            continue;
        };
        if !entry.title.trim().is_empty() {
            clip.title = entry.title.trim().to_string();
        }
        if !entry.reason.trim().is_empty() {
            clip.reason = entry.reason.trim().to_string();
        }
        if let Some(strategy) = &entry.strategy {
            if !strategy.trim().is_empty() {
                clip.strategy = Some(strategy.trim().to_string());
            }
        }
    }
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(start: f64, end: f64) -> ClipCandidate {
        ClipCandidate {
            title: "original title".to_string(),
            start_seconds: start,
            end_seconds: end,
            transcript_excerpt: "the excerpt".to_string(),
            hook_score: 3,
            reason: "original reason".to_string(),
            strategy: None,
        }
    }

    #[test]
    fn parses_a_bare_json_array() {
        let entries = parse_enrich_response(
            r#"[{"index": 0, "title": "T", "reason": "R", "strategy": "S"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "T");
    }

    #[test]
    fn parses_json_wrapped_in_prose() {
        let response = "Here you go:\n[{\"index\": 0, \"title\": \"T\"}]\nHope that helps!";
        let entries = parse_enrich_response(response).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn rejects_responses_without_an_array() {
        assert!(parse_enrich_response("sorry, I cannot do that").is_err());
    }

    #[test]
    fn enrichment_preserves_boundaries_and_excerpt() {
        let clips = vec![candidate(40.0, 70.0)];
        let entries = parse_enrich_response(
            r#"[{"index": 0, "title": "New", "reason": "Better", "strategy": "Post it"}]"#,
        )
        .unwrap();
        let enriched = apply_enrichment(&clips, &entries);
        assert_eq!(enriched[0].title, "New");
        assert_eq!(enriched[0].reason, "Better");
        assert_eq!(enriched[0].strategy.as_deref(), Some("Post it"));
        assert_eq!(enriched[0].start_seconds, 40.0);
        assert_eq!(enriched[0].end_seconds, 70.0);
        assert_eq!(enriched[0].transcript_excerpt, "the excerpt");
    }

    #[test]
    fn out_of_range_and_empty_entries_are_ignored() {
        let clips = vec![candidate(0.0, 20.0)];
        let entries = parse_enrich_response(
            r#"[{"index": 7, "title": "Lost"}, {"index": 0, "title": "  "}]"#,
        )
        .unwrap();
        let enriched = apply_enrichment(&clips, &entries);
        assert_eq!(enriched[0].title, "original title");
    }
}

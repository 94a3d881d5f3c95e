use crate::types::ClipCandidate;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format the candidate list as human-readable markdown
pub fn format_candidates_readable(candidates: &[ClipCandidate]) -> String {
    if candidates.is_empty() {
        return "No clip candidates found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "# Clip candidates ({})\n\n",
        candidates.len()
    ));

    for (i, clip) in candidates.iter().enumerate() {
        let start = format_timestamp(clip.start_seconds);
        let end = format_timestamp(clip.end_seconds);
        output.push_str(&format!(
            "## {}. [{}–{}] {}\n\n",
            i + 1,
            start,
            end,
            clip.title
        ));
        output.push_str(&format!(
            "**Hook score:** {}/5 | **Duration:** {:.0}s\n\n",
            clip.hook_score,
            clip.duration_seconds()
        ));
        output.push_str(&format!("Why: {}\n\n", clip.reason));
        if let Some(strategy) = &clip.strategy {
            output.push_str(&format!("**Strategy:** {}\n\n", strategy));
        }
        output.push_str(&format!("> {}\n\n", clip.transcript_excerpt));
    }

    output
}

use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

use tokio::fs;

use crate::error::Result;
use crate::provider::Provider;
use crate::types::ClipCandidate;

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("clipscout")
}

/// Get the cache directory for a transcript, keyed by its contents so edits
/// to the source file never serve stale enrichments.
pub fn get_cache_dir(transcript_text: &str) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    transcript_text.hash(&mut hasher);
    get_root_cache_dir().join(hasher.finish().to_string())
}

/// Path for cached enriched clips (provider, language and count aware)
pub fn get_clips_path(
    cache_dir: &Path,
    provider: &Provider,
    lang: &str,
    max_clips: usize,
) -> PathBuf {
    cache_dir.join(format!(
        "clips_{}_{}_{}.json",
        provider.slug(),
        lang,
        max_clips
    ))
}

/// Load cached enriched clips from a file
pub async fn load_clips(path: &Path) -> Result<Vec<ClipCandidate>> {
    let json_content = fs::read_to_string(path).await?;
    let clips: Vec<ClipCandidate> = serde_json::from_str(&json_content)?;
    Ok(clips)
}

/// Save enriched clips to a file
pub async fn save_clips(clips: &[ClipCandidate], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let pretty_json = serde_json::to_string_pretty(clips)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_tracks_transcript_contents() {
        let a = get_cache_dir("one transcript");
        let b = get_cache_dir("another transcript");
        let a_again = get_cache_dir("one transcript");
        assert_ne!(a, b);
        assert_eq!(a, a_again);
    }

    #[test]
    fn clips_path_distinguishes_provider_lang_and_count() {
        let dir = PathBuf::from("/tmp/x");
        let grok = get_clips_path(&dir, &Provider::Grok, "en", 5);
        let gemini = get_clips_path(&dir, &Provider::Gemini, "en", 5);
        let ru = get_clips_path(&dir, &Provider::Grok, "ru", 5);
        let three = get_clips_path(&dir, &Provider::Grok, "en", 3);
        assert_ne!(grok, gemini);
        assert_ne!(grok, ru);
        assert_ne!(grok, three);
    }
}

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod enrich;
pub mod error;
pub mod format;
pub mod hooks;
pub mod normalize;
pub mod provider;
pub mod source;
pub mod types;
pub mod window;

pub use analyzer::analyze_clips;
pub use cache::{get_cache_dir, get_clips_path, get_root_cache_dir, load_clips, save_clips};
pub use config::EngineConfig;
pub use enrich::enrich_candidates;
pub use error::{ClipscoutError, Result};
pub use format::{format_candidates_readable, format_timestamp};
pub use provider::{Provider, ProviderConfig};
pub use source::load_transcript;
pub use types::{ClipCandidate, Transcript, TranscriptCue};

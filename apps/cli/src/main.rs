use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use clipscout_core::{
    EngineConfig, Provider, analyze_clips, enrich_candidates, format_candidates_readable,
    get_cache_dir, get_clips_path, load_clips, load_transcript, save_clips,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Grok,
    Openai,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Grok => Provider::Grok,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "clipscout")]
#[command(
    about = "Find short-form clip candidates in a video transcript and title them with AI"
)]
struct Cli {
    /// Transcript file: whisper-style JSON or plain text
    input: PathBuf,

    /// Maximum number of clips to return
    #[arg(short, long, default_value_t = 5)]
    max_clips: usize,

    /// Minimum clip duration in seconds
    #[arg(long)]
    min_duration: Option<f64>,

    /// Maximum clip duration in seconds
    #[arg(long)]
    max_duration: Option<f64>,

    /// Rewrite titles and attach posting strategies with an AI provider
    #[arg(short, long)]
    enrich: bool,

    /// AI provider for enrichment
    #[arg(short, long, default_value = "grok")]
    provider: CliProvider,

    /// Enrichment language (e.g., "en", "ru"). Defaults to the transcript's.
    #[arg(short, long)]
    lang: Option<String>,

    /// Force re-enrichment even if cached results exist
    #[arg(short, long)]
    force: bool,

    /// Emit pretty JSON instead of readable output
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate API key early so we fail before any work
    if cli.enrich {
        if let Err(e) = provider.validate_api_key() {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }

    if !cli.json {
        println!(
            "\n{}  {}\n",
            style("clipscout").cyan().bold(),
            style("Clip Finder").dim()
        );
        println!("{}", style("─".repeat(60)).dim());
    }

    let total_start = Instant::now();

    // Step 1: Load transcript
    let transcript = load_transcript(&cli.input).await?;
    let duration_mins = transcript.segments.last().map(|c| c.end / 60.0).unwrap_or(0.0);
    if !cli.json {
        if transcript.segments.is_empty() {
            println!(
                "{} Loaded transcript {}",
                style("✓").green().bold(),
                style("(no timing, will synthesize)").dim()
            );
        } else {
            println!(
                "{} Loaded transcript: {:.1} min, {} cues",
                style("✓").green().bold(),
                duration_mins,
                transcript.segments.len()
            );
        }
    }

    // Step 2: Analyze
    let mut config = EngineConfig::default();
    if let Some(min) = cli.min_duration {
        config.min_clip_secs = min;
    }
    if let Some(max) = cli.max_duration {
        config.max_clip_secs = max;
    }
    let clips = analyze_clips(&transcript.text, &transcript.segments, cli.max_clips, &config);
    if !cli.json {
        println!(
            "{} Found {} clip candidate(s)",
            style("✓").green().bold(),
            style(clips.len()).yellow()
        );
    }

    // Step 3: Enrich (check cache with provider+lang+count)
    let clips = if cli.enrich && !clips.is_empty() {
        let step_start = Instant::now();
        let lang = cli.lang.unwrap_or_else(|| {
            if transcript.language.is_empty() {
                "en".to_string()
            } else {
                transcript.language.clone()
            }
        });
        let cache_dir = get_cache_dir(&transcript.text);
        let clips_path = get_clips_path(&cache_dir, &provider, &lang, cli.max_clips);

        if !cli.force && clips_path.exists() {
            let cached = load_clips(&clips_path).await?;
            if !cli.json {
                println!(
                    "{} Enriched ({}) {}",
                    style("✓").green().bold(),
                    provider.name(),
                    style("(cached)").dim()
                );
            }
            cached
        } else {
            let spinner = (!cli.json).then(|| {
                create_spinner(&format!("Enriching {} clips with {}...", clips.len(), provider.name()))
            });
            let enriched = enrich_candidates(&provider, &clips, &lang).await?;
            save_clips(&enriched, &clips_path).await?;
            if let Some(spinner) = spinner {
                spinner.finish_with_message(format!(
                    "{} Enriched ({}) {}",
                    style("✓").green().bold(),
                    provider.name(),
                    style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
                ));
            }
            enriched
        }
    } else {
        clips
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&clips)?);
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    println!("{}", format_candidates_readable(&clips));

    Ok(())
}

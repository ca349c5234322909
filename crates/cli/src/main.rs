#![deny(warnings)]

use anyhow::Context;
use clap::Parser;
use focus_translator_core::analysis::{analyze, AnalysisResponse};
use focus_translator_core::config::{
    resolve_f64_with_default, Env, StdEnv, ThresholdConfig, DEFAULT_THRESHOLD_END,
    DEFAULT_THRESHOLD_START, ENV_THRESHOLD_END, ENV_THRESHOLD_START,
};
use focus_translator_core::pitch::SampledPitchContour;
use focus_translator_core::transcript::{JsonTranscriptSource, TranscriptSource};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "focus-translator")]
#[command(about = "Detect the prosodically focused word and annotate its translation")]
struct Args {
    /// Whisper-style transcription document (segments, word timestamps,
    /// translation).
    #[arg(long)]
    transcript: PathBuf,

    /// Sampled F0 contour document (fixed time step, frames in Hz, 0 for
    /// unvoiced).
    #[arg(long)]
    pitch: PathBuf,

    /// Upper bound of the threshold sweep.
    #[arg(long)]
    threshold_start: Option<f64>,

    /// Lower bound of the threshold sweep.
    #[arg(long)]
    threshold_end: Option<f64>,

    /// Pretty-print the result JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let thresholds = build_thresholds(&args, &env)?;

    tracing::info!(
        threshold_start = thresholds.start(),
        threshold_end = thresholds.end(),
        "config loaded"
    );

    let transcript = JsonTranscriptSource::new(&args.transcript)
        .fetch()
        .await
        .context("loading transcript")?;
    let contour = SampledPitchContour::load(&args.pitch)
        .await
        .context("loading pitch contour")?;

    let result = analyze(&transcript, &contour, &thresholds);
    let failed = result.is_err();
    let response = AnalysisResponse::from(result);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_thresholds(args: &Args, env: &impl Env) -> anyhow::Result<ThresholdConfig> {
    let start = resolve_f64_with_default(
        args.threshold_start,
        ENV_THRESHOLD_START,
        env,
        DEFAULT_THRESHOLD_START,
    )?;
    let end = resolve_f64_with_default(
        args.threshold_end,
        ENV_THRESHOLD_END,
        env,
        DEFAULT_THRESHOLD_END,
    )?;
    Ok(ThresholdConfig::new(start, end)?)
}

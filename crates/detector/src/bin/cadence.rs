use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use cadence_audio::AudioDecoder;
use cadence_detector::{BpmDetector, NullSink};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate the tempo of an audio file", long_about = None)]
struct Cli {
    /// Path to the audio file to analyze (WAV, MP3, FLAC, OGG)
    input: PathBuf,
    /// Print per-stage progress to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
    /// Abort the analysis after this many seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let audio = AudioDecoder::open(&cli.input)
        .with_context(|| format!("decode {}", cli.input.display()))?;
    info!(
        sample_rate = audio.sample_rate,
        channels = audio.channels,
        duration_secs = audio.duration_secs(),
        "loaded audio"
    );
    let sample_rate = audio.sample_rate;
    let samples = audio.to_mono();

    // The estimator is synchronous and potentially long-running; keep it off
    // the runtime threads and bound it with a wall-clock timeout.
    let verbose = cli.verbose;
    let analysis = tokio::task::spawn_blocking(move || {
        let detector = BpmDetector::default();
        if verbose {
            let mut sink = |message: &str| eprintln!("{message}");
            detector.detect(&samples, sample_rate, &mut sink)
        } else {
            detector.detect(&samples, sample_rate, &mut NullSink)
        }
    });
    let estimate = tokio::time::timeout(Duration::from_secs(cli.timeout_secs), analysis)
        .await
        .context("analysis timed out")?
        .context("analysis task failed")??;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{:.2} BPM", estimate.bpm());
    }
    Ok(())
}

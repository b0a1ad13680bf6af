//! Binary entrypoint for meme-studio.
//!
//! Translates CLI flags into UI events and delegates all logic to the
//! library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use meme_studio::decode::FsImageDecoder;
use meme_studio::events::UiEvent;
use meme_studio::speech::build_speaker;
use meme_studio::studio::Studio;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "meme-studio", about = "Meme captioning studio")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image to place on the canvas
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Top caption text
    #[arg(long, default_value = "")]
    top: String,

    /// Bottom caption text
    #[arg(long, default_value = "")]
    bottom: String,

    /// Where to save the composed meme (PNG)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Read the caption text aloud
    #[arg(long)]
    speak: bool,

    /// Voice to speak with
    #[arg(long)]
    voice: Option<String>,

    /// Volume slider position (0-100)
    #[arg(long)]
    volume: Option<u8>,

    /// List available voices and exit
    #[arg(long)]
    list_voices: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("meme_studio={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = match &cli.config {
        Some(path) => meme_studio::config::Configuration::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => meme_studio::config::Configuration::default(),
    };
    let cfg = cfg.validated().context("validating configuration")?;

    let speaker = build_speaker(cfg.speech.engine.as_deref());
    let mut studio = Studio::new(cfg, Box::new(FsImageDecoder), speaker)?;

    if cli.list_voices {
        for voice in studio.voices() {
            println!("{}", voice.label());
        }
        return Ok(());
    }

    let (tx, rx) = crossbeam_channel::unbounded();
    if let Some(volume) = cli.volume {
        tx.send(UiEvent::VolumeChanged(volume))?;
    }
    if let Some(voice) = cli.voice.clone() {
        tx.send(UiEvent::VoiceSelected(voice))?;
    }
    if let Some(image) = cli.image.clone() {
        tx.send(UiEvent::ImageSelected(image))?;
    }
    tx.send(UiEvent::CaptionEdited {
        top: cli.top.clone(),
        bottom: cli.bottom.clone(),
    })?;
    if !cli.top.is_empty() || !cli.bottom.is_empty() {
        tx.send(UiEvent::GenerateRequested)?;
    }
    if cli.speak {
        tx.send(UiEvent::SpeakRequested)?;
    }
    drop(tx);

    meme_studio::studio::run(&rx, &mut studio)?;

    if let Some(out) = &cli.out {
        studio.save(out)?;
        info!(path = %out.display(), "saved meme");
    }
    Ok(())
}

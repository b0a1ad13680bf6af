//! Speech synthesis behind a capability trait.
//!
//! The real backend shells out to `espeak-ng`; when no engine is available
//! the studio degrades to a logging speaker rather than failing.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

/// A selectable synthesis voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    pub default_voice: bool,
}

impl Voice {
    /// Display label for voice pickers: `"name (lang)"`, with a `-- DEFAULT`
    /// suffix on the engine default.
    pub fn label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.lang);
        if self.default_voice {
            label.push_str(" -- DEFAULT");
        }
        label
    }
}

/// One unit of text queued for audible playback.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<String>,
    /// Playback volume as a 0.0-1.0 fraction.
    pub volume: f32,
}

/// Map a 0-100 volume slider position to the 0.0-1.0 utterance fraction.
pub fn volume_fraction(slider: u8) -> f32 {
    f32::from(slider.min(100)) * 0.01
}

/// Requests audible playback from a text-to-speech engine.
pub trait Speaker {
    fn voices(&self) -> Vec<Voice>;
    fn speak(&self, utterance: &Utterance) -> Result<()>;
}

/// `espeak-ng` backend.
#[derive(Debug)]
pub struct EspeakSpeaker {
    bin: PathBuf,
}

impl EspeakSpeaker {
    pub fn new(bin: PathBuf) -> Self {
        Self { bin }
    }

    /// Locate `espeak-ng` (or plain `espeak`) on `PATH`.
    pub fn discover() -> Option<Self> {
        find_in_path("espeak-ng")
            .or_else(|| find_in_path("espeak"))
            .map(Self::new)
    }
}

impl Speaker for EspeakSpeaker {
    fn voices(&self) -> Vec<Voice> {
        let output = match Command::new(&self.bin).arg("--voices").output() {
            Ok(out) if out.status.success() => out,
            _ => return Vec::new(),
        };
        parse_voice_listing(&String::from_utf8_lossy(&output.stdout))
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        let args = espeak_args(utterance);
        debug!(bin = %self.bin.display(), ?args, "running speech engine");
        let output = Command::new(&self.bin)
            .args(&args)
            .output()
            .with_context(|| format!("failed to run {}", self.bin.display()))?;
        if !output.status.success() {
            return Err(anyhow!(
                "speech engine failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(())
    }
}

/// Logging fallback used when no engine is installed.
#[derive(Debug, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        info!(
            text = %utterance.text,
            volume = utterance.volume,
            "no speech engine detected; printing only"
        );
        Ok(())
    }
}

/// Amplitude argument for espeak: 100 is nominal, scaled by the 0.0-1.0
/// utterance volume.
fn amplitude(volume: f32) -> i32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as i32
}

fn espeak_args(utterance: &Utterance) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(voice) = utterance.voice.as_deref()
        && !voice.is_empty()
    {
        args.push("-v".to_string());
        args.push(voice.to_string());
    }
    args.push("-a".to_string());
    args.push(amplitude(utterance.volume).to_string());
    // Terminate option parsing so caption text starting with '-' is spoken,
    // not interpreted as flags.
    args.push("--".to_string());
    args.push(utterance.text.clone());
    args
}

// `espeak-ng --voices` prints a header row then columns:
// Pty Language Age/Gender VoiceName File. The language marked `en` is the
// engine default.
fn parse_voice_listing(listing: &str) -> Vec<Voice> {
    let mut voices = Vec::new();
    for line in listing.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }
        let lang = fields[1].to_string();
        let name = fields[3].to_string();
        let default_voice = lang == "en";
        voices.push(Voice {
            name,
            lang,
            default_voice,
        });
    }
    voices
}

fn find_in_path(bin: &str) -> Option<PathBuf> {
    // If a path-like string is provided, respect it directly.
    if bin.contains(std::path::MAIN_SEPARATOR) {
        let p = PathBuf::from(bin);
        return p.exists().then_some(p);
    }
    let paths = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&paths) {
        let candidate = dir.join(bin);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// Build the configured speaker, degrading to [`NullSpeaker`] when neither a
/// configured binary nor a discoverable engine exists.
pub fn build_speaker(engine: Option<&Path>) -> Box<dyn Speaker> {
    if let Some(path) = engine {
        if path.exists() {
            info!(bin = %path.display(), "using configured speech engine");
            return Box::new(EspeakSpeaker::new(path.to_path_buf()));
        }
        info!(bin = %path.display(), "configured speech engine missing; falling back");
    }
    match EspeakSpeaker::discover() {
        Some(speaker) => {
            info!(bin = %speaker.bin.display(), "detected speech engine");
            Box::new(speaker)
        }
        None => Box::new(NullSpeaker),
    }
}

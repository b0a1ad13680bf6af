use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use serde::Deserialize;

use crate::error::Error;

/// Top-level studio configuration, loaded from kebab-case YAML.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    pub canvas: CanvasOptions,
    pub caption: CaptionOptions,
    pub speech: SpeechOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            canvas: CanvasOptions::default(),
            caption: CaptionOptions::default(),
            speech: SpeechOptions::default(),
        }
    }
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde
    /// defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.canvas.width > 0 && self.canvas.height > 0,
            "canvas dimensions must be positive"
        );
        ensure!(self.caption.font_px > 0.0, "caption font-px must be positive");
        ensure!(
            !self.caption.font_families.is_empty() || self.caption.font_path.is_some(),
            "caption must configure a font path or at least one font family"
        );
        ensure!(self.speech.volume <= 100, "speech volume must be 0-100");
        Ok(self)
    }
}

/// Fixed canvas geometry the meme is composed on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CanvasOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CaptionOptions {
    /// Explicit font file; takes precedence over family lookup.
    pub font_path: Option<PathBuf>,
    /// System font families tried in order when no path is configured.
    pub font_families: Vec<String>,
    pub font_px: f32,
    pub color: [u8; 3],
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            font_path: None,
            font_families: vec![
                "Impact".to_string(),
                "DejaVu Sans".to_string(),
                "Liberation Sans".to_string(),
            ],
            font_px: 20.0,
            color: [255, 255, 255],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SpeechOptions {
    /// Explicit speech-engine binary; discovered on PATH when absent.
    pub engine: Option<PathBuf>,
    /// Voice preselected at startup.
    pub voice: Option<String>,
    /// Initial volume slider position, 0-100.
    pub volume: u8,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            engine: None,
            voice: None,
            volume: 100,
        }
    }
}

//! Sequential event dispatch tying the canvas, captions, decoder, and
//! speaker together.

use std::path::Path;

use ab_glyph::FontArc;
use crossbeam_channel::Receiver;
use tracing::{debug, info};

use crate::compose::canvas::Canvas;
use crate::compose::caption;
use crate::config::Configuration;
use crate::decode::ImageDecoder;
use crate::error::Error;
use crate::events::UiEvent;
use crate::speech::{Speaker, Utterance, Voice, volume_fraction};
use crate::state::UiState;

/// The studio owns all mutable session state. Events are applied one at a
/// time in arrival order; handlers never overlap.
pub struct Studio {
    config: Configuration,
    canvas: Canvas,
    font: FontArc,
    decoder: Box<dyn ImageDecoder>,
    speaker: Box<dyn Speaker>,
    state: UiState,
}

impl Studio {
    pub fn new(
        config: Configuration,
        decoder: Box<dyn ImageDecoder>,
        speaker: Box<dyn Speaker>,
    ) -> anyhow::Result<Self> {
        let canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
        let font = caption::load_font(
            config.caption.font_path.as_deref(),
            &config.caption.font_families,
        )?;
        let state = UiState {
            selected_voice: config.speech.voice.clone(),
            volume: config.speech.volume.min(100),
            ..UiState::default()
        };
        Ok(Self {
            config,
            canvas,
            font,
            decoder,
            speaker,
            state,
        })
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn voices(&self) -> Vec<Voice> {
        self.speaker.voices()
    }

    /// Apply a single event. Precondition violations surface as disabled
    /// controls (the event is ignored), not as errors.
    pub fn handle(&mut self, event: UiEvent) -> Result<(), Error> {
        match event {
            UiEvent::ImageSelected(path) => {
                // A new selection always starts from a blank canvas.
                self.canvas.clear();
                let source = self
                    .decoder
                    .decode(&path)
                    .map_err(|err| Error::BadImage(format!("{err:#}")))?;
                let fit = self
                    .canvas
                    .place_image(&source)
                    .map_err(|err| Error::BadImage(format!("{err:#}")))?;
                self.state.image_placed();
                info!(
                    path = %path.display(),
                    width = fit.width,
                    height = fit.height,
                    "image placed on canvas"
                );
            }
            UiEvent::CaptionEdited { top, bottom } => {
                self.state.set_captions(top, bottom);
            }
            UiEvent::GenerateRequested => {
                caption::draw_captions(
                    self.canvas.image_mut(),
                    &self.font,
                    self.config.caption.font_px,
                    self.config.caption.color,
                    &self.state.top_text,
                    &self.state.bottom_text,
                );
                self.state.captions_stamped();
            }
            UiEvent::SpeakRequested => {
                if !self.state.controls().read_enabled {
                    debug!("speak requested with no caption text; ignoring");
                    return Ok(());
                }
                let utterance = Utterance {
                    text: self.state.spoken_text(),
                    voice: self.state.selected_voice.clone(),
                    volume: volume_fraction(self.state.volume),
                };
                self.speaker.speak(&utterance).map_err(Error::Speech)?;
            }
            UiEvent::VolumeChanged(value) => {
                self.state.volume = value.min(100);
                debug!(icon = self.state.volume_level().icon_name(), "volume changed");
            }
            UiEvent::VoiceSelected(name) => {
                self.state.selected_voice = Some(name);
            }
            UiEvent::CanvasCleared => {
                self.canvas.clear();
                self.state.cleared();
            }
        }
        Ok(())
    }

    /// Write the composed canvas out as an image file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if !self.state.image_loaded && !self.state.captions_drawn {
            return Err(Error::NoImage);
        }
        self.canvas
            .save(path)
            .map_err(|err| Error::BadImage(format!("{err:#}")))
    }
}

/// Drain `events` in order until the sending side disconnects.
pub fn run(events: &Receiver<UiEvent>, studio: &mut Studio) -> Result<(), Error> {
    for event in events.iter() {
        studio.handle(event)?;
    }
    Ok(())
}

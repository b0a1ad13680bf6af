//! Explicit UI-state record for the studio.
//!
//! Control enablement is derived from this record instead of being toggled
//! ad hoc, so the rules are testable on their own.

/// Current interaction state: what is loaded, what text is entered, and the
/// speech settings the user picked.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub image_loaded: bool,
    pub captions_drawn: bool,
    pub top_text: String,
    pub bottom_text: String,
    pub selected_voice: Option<String>,
    /// Volume slider position, 0-100.
    pub volume: u8,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            image_loaded: false,
            captions_drawn: false,
            top_text: String::new(),
            bottom_text: String::new(),
            selected_voice: None,
            volume: 100,
        }
    }
}

/// Which controls are currently actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub clear_enabled: bool,
    pub read_enabled: bool,
    pub voice_select_enabled: bool,
    pub image_input_enabled: bool,
}

impl UiState {
    pub fn has_caption_text(&self) -> bool {
        !self.top_text.is_empty() || !self.bottom_text.is_empty()
    }

    pub fn controls(&self) -> Controls {
        Controls {
            clear_enabled: self.image_loaded || self.captions_drawn,
            read_enabled: self.has_caption_text(),
            voice_select_enabled: self.has_caption_text(),
            image_input_enabled: !self.image_loaded,
        }
    }

    pub fn set_captions(&mut self, top: String, bottom: String) {
        self.top_text = top;
        self.bottom_text = bottom;
    }

    pub fn image_placed(&mut self) {
        self.image_loaded = true;
        self.captions_drawn = false;
    }

    pub fn captions_stamped(&mut self) {
        self.captions_drawn = true;
    }

    pub fn cleared(&mut self) {
        self.image_loaded = false;
        self.captions_drawn = false;
    }

    /// Caption text submitted for speech: top followed directly by bottom.
    pub fn spoken_text(&self) -> String {
        format!("{}{}", self.top_text, self.bottom_text)
    }

    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_slider(self.volume)
    }
}

/// Coarse volume bucket driving the slider icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    pub fn from_slider(value: u8) -> Self {
        match value {
            0 => Self::Muted,
            1..=33 => Self::Low,
            34..=66 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Muted => "volume-level-0",
            Self::Low => "volume-level-1",
            Self::Medium => "volume-level-2",
            Self::High => "volume-level-3",
        }
    }
}

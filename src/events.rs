use std::path::PathBuf;

/// One user action, applied to the studio in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A file was chosen in the image picker.
    ImageSelected(PathBuf),
    /// The top/bottom caption inputs changed.
    CaptionEdited { top: String, bottom: String },
    /// The caption form was submitted: stamp the text onto the canvas.
    GenerateRequested,
    /// Read the caption text aloud.
    SpeakRequested,
    /// The volume slider moved (0-100).
    VolumeChanged(u8),
    /// A voice was picked from the voice list.
    VoiceSelected(String),
    /// The clear button was pressed.
    CanvasCleared,
}

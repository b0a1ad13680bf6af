use thiserror::Error;

/// Library error type for meme-studio operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The selected file could not be decoded into an image.
    #[error("invalid image: {0}")]
    BadImage(String),

    /// An operation needed an image on the canvas and none was placed.
    #[error("no image loaded on the canvas")]
    NoImage,

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// Speech-engine failure from the downstream speaker.
    #[error("speech error: {0}")]
    Speech(anyhow::Error),
}

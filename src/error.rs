use thiserror::Error;

/// Errors that can occur while turning screenshots into recipes
#[derive(Error, Debug)]
pub enum ScanError {
    /// The 1-based profile selector has no catalog entry
    #[error("Profile {selector} does not exist (catalog has {available} profiles)")]
    InvalidProfile { selector: usize, available: usize },

    /// The OCR engine failed to process an image
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// Failed to decode or encode an image
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The catalog could not be loaded or is malformed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or process error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request to a remote OCR service failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Pipeline builder was not given everything it needs
    #[error("Builder error: {0}")]
    Builder(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

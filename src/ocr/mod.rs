mod factory;
mod google_vision;
mod tesseract;

pub use factory::OcrEngineFactory;
pub use google_vision::GoogleVisionEngine;
pub use tesseract::TesseractEngine;

use async_trait::async_trait;
use image::GrayImage;

use crate::error::Result;

/// Unified trait for OCR engines.
///
/// An engine receives one binarized menu image and returns the raw recognized
/// text, line breaks and noise included. Unreadable images yield an empty or
/// garbage string; only a broken engine returns an error.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Get the engine name (e.g., "tesseract", "google_vision")
    fn engine_name(&self) -> &str;

    /// Recognize the text of a preprocessed image
    async fn recognize(&self, image: &GrayImage) -> Result<String>;
}

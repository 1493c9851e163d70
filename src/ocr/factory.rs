use crate::config::OcrConfig;
use crate::error::{Result, ScanError};
use crate::ocr::{GoogleVisionEngine, OcrEngine, TesseractEngine};

pub struct OcrEngineFactory;

impl OcrEngineFactory {
    /// Create the engine named in the configuration
    pub fn from_config(config: &OcrConfig) -> Result<Box<dyn OcrEngine>> {
        Self::create(&config.engine, config)
    }

    /// Create an engine instance by name
    pub fn create(engine_name: &str, config: &OcrConfig) -> Result<Box<dyn OcrEngine>> {
        match engine_name {
            "tesseract" => Ok(Box::new(TesseractEngine::new(config))),
            "google_vision" => Ok(Box::new(GoogleVisionEngine::new(config)?)),
            _ => Err(ScanError::Ocr(format!("Unknown OCR engine: {}", engine_name))),
        }
    }

    /// List all available engine names
    pub fn available_engines() -> Vec<&'static str> {
        vec!["tesseract", "google_vision"]
    }
}

use async_trait::async_trait;
use image::GrayImage;
use log::debug;
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::config::OcrConfig;
use crate::error::{Result, ScanError};
use crate::ocr::OcrEngine;

/// Runs a local Tesseract executable on each image
pub struct TesseractEngine {
    command: String,
    language: String,
    psm: Option<u8>,
}

impl TesseractEngine {
    pub fn new(config: &OcrConfig) -> Self {
        TesseractEngine {
            command: config.tesseract_cmd.clone(),
            language: config.language.clone(),
            psm: config.psm,
        }
    }

    /// Create an engine for a specific executable with default settings
    pub fn with_command(command: impl Into<String>) -> Self {
        TesseractEngine {
            command: command.into(),
            language: "eng".to_string(),
            psm: None,
        }
    }

    fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            "stdout".to_string(),
            "-l".to_string(),
            self.language.clone(),
        ];
        if let Some(psm) = self.psm {
            args.push("--psm".to_string());
            args.push(psm.to_string());
        }
        args
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn engine_name(&self) -> &str {
        "tesseract"
    }

    async fn recognize(&self, image: &GrayImage) -> Result<String> {
        // Tesseract reads from a file, so hand it a temporary PNG
        let input = NamedTempFile::with_suffix(".png")?;
        image.save(input.path())?;

        debug!(
            "Running {} on {}x{} image",
            self.command,
            image.width(),
            image.height()
        );

        let output = Command::new(&self.command)
            .arg(input.path())
            .args(self.arguments())
            .output()
            .await
            .map_err(|e| ScanError::Ocr(format!("Failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::Ocr(format!("Tesseract failed: {}", stderr.trim())));
        }

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        debug!("Tesseract returned {} characters", text.len());

        Ok(text)
    }
}

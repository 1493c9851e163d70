use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, ImageFormat};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::io::Cursor;
use std::time::Duration;

use crate::config::OcrConfig;
use crate::error::{Result, ScanError};
use crate::ocr::OcrEngine;

/// Sends images to the Google Cloud Vision TEXT_DETECTION endpoint
pub struct GoogleVisionEngine {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleVisionEngine {
    /// Create a new Google Vision engine from configuration
    pub fn new(config: &OcrConfig) -> Result<Self> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                ScanError::Ocr("GOOGLE_API_KEY not found in config or environment".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleVisionEngine {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        GoogleVisionEngine {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

/// Encodes a grayscale image as base64 PNG
fn encode_png_base64(image: &GrayImage) -> Result<String> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(STANDARD.encode(buffer.into_inner()))
}

#[async_trait]
impl OcrEngine for GoogleVisionEngine {
    fn engine_name(&self) -> &str {
        "google_vision"
    }

    async fn recognize(&self, image: &GrayImage) -> Result<String> {
        let base64_image = encode_png_base64(image)?;

        let url = format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key);

        let request_body = json!({
            "requests": [{
                "image": {
                    "content": base64_image
                },
                "features": [{
                    "type": "TEXT_DETECTION"
                }]
            }]
        });

        debug!("Sending OCR request to Google Vision API");

        let response = self
            .client
            .post(&url)
            .header("Accept-Encoding", "identity")
            .json(&request_body)
            .send()
            .await?;

        // Check for HTTP errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(ScanError::Ocr(format!(
                "Google Vision API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;

        if let Some(message) = response_body["responses"][0]["error"]["message"].as_str() {
            return Err(ScanError::Ocr(format!("Google Vision API error: {}", message)));
        }

        // A menu with nothing readable has no annotation at all
        let text = response_body["responses"][0]["fullTextAnnotation"]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        debug!("Extracted text from image: {} characters", text.len());

        Ok(text)
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScanConfig {
    /// OCR engine selection and engine-specific settings
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Image binarization applied before OCR
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    /// Fuzzy matching thresholds
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Where the ingredient/meal catalog lives
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Configuration for the OCR engine
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// Engine name: "tesseract" or "google_vision"
    #[serde(default = "default_engine")]
    pub engine: String,
    /// Path or name of the tesseract executable
    #[serde(default = "default_tesseract_cmd")]
    pub tesseract_cmd: String,
    /// Tesseract language pack
    #[serde(default = "default_language")]
    pub language: String,
    /// Tesseract page segmentation mode (engine default when unset)
    pub psm: Option<u8>,
    /// Google Vision API key (falls back to GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL of the Google Vision API
    #[serde(default = "default_vision_base_url")]
    pub base_url: String,
    /// Request timeout in seconds for remote engines
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            tesseract_cmd: default_tesseract_cmd(),
            language: default_language(),
            psm: None,
            api_key: None,
            base_url: default_vision_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for image preprocessing
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PreprocessConfig {
    /// Contrast enhancement factor (1.0 leaves the image unchanged)
    #[serde(default = "default_contrast")]
    pub contrast: f32,
    /// Luminance above which a pixel becomes white
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            contrast: default_contrast(),
            threshold: default_threshold(),
        }
    }
}

/// Configuration for fuzzy ingredient matching
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MatchingConfig {
    /// A token matches when its edit distance is strictly below this value
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
    /// Words and tokens with at most this many characters are dropped as noise
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            min_token_len: default_min_token_len(),
        }
    }
}

/// Configuration for the catalog store
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON file holding one entry per profile
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

// Default value functions
fn default_engine() -> String {
    "tesseract".to_string()
}

fn default_tesseract_cmd() -> String {
    "tesseract".to_string()
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_vision_base_url() -> String {
    "https://vision.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_contrast() -> f32 {
    2.0
}

fn default_threshold() -> u8 {
    220
}

fn default_max_distance() -> usize {
    3
}

fn default_min_token_len() -> usize {
    2
}

fn default_catalog_path() -> String {
    "recipes.json".to_string()
}

impl ScanConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MENU_RECIPES__ prefix
    /// 2. menu_recipes.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MENU_RECIPES__OCR__TESSERACT_CMD
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<ScanConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("menu_recipes").required(false))
        // Use double underscore for nested: MENU_RECIPES__OCR__ENGINE
        .add_source(
            Environment::with_prefix("MENU_RECIPES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

//! Reads screenshots of an in-game crafting menu and lists the two-ingredient
//! recipes that can be cooked with the ingredients shown.
//!
//! ```no_run
//! # use menu_recipes::{ExtractionPipeline, ScanConfig};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = ExtractionPipeline::from_config(&ScanConfig::load()?)?;
//! let images = vec![image::open("menu.png")?];
//!
//! for recipe in pipeline.extract(&images, 1).await? {
//!     println!("{} + {} -> {}", recipe.ingredient1, recipe.ingredient2, recipe.effect);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod combiner;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod ocr;
pub mod pipeline;
pub mod preprocess;

pub use builder::ExtractionPipelineBuilder;
pub use catalog::{CatalogStore, JsonCatalogStore, MemoryCatalogStore};
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use model::{Ingredient, MealRule, ObservedTypes, ProfileCatalog, RecipeInstance};
pub use normalize::normalize_str;
pub use ocr::{GoogleVisionEngine, OcrEngine, OcrEngineFactory, TesseractEngine};
pub use pipeline::{Diagnostic, DiagnosticHook, ExtractionPipeline};

use image::DynamicImage;

/// Extract recipes using configuration from `menu_recipes.toml` and the environment
///
/// # Arguments
/// * `images` - Captured menu regions, in capture order
/// * `profile_selector` - 1-based profile number
///
/// # Errors
/// Returns an error if configuration or the catalog cannot be loaded, the
/// profile does not exist, or the OCR engine fails.
pub async fn extract_recipes(
    images: &[DynamicImage],
    profile_selector: usize,
) -> Result<Vec<RecipeInstance>> {
    let config = ScanConfig::load()?;
    let pipeline = ExtractionPipeline::from_config(&config)?;
    pipeline.extract(images, profile_selector).await
}

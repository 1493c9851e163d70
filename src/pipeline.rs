use image::DynamicImage;
use log::{debug, info};
use std::sync::Arc;

use crate::builder::ExtractionPipelineBuilder;
use crate::catalog::CatalogStore;
use crate::combiner::combine;
use crate::config::{MatchingConfig, PreprocessConfig, ScanConfig};
use crate::error::{Result, ScanError};
use crate::matcher::{resolve, tokens_from_text};
use crate::model::{ObservedTypes, ProfileCatalog, RecipeInstance};
use crate::ocr::OcrEngine;
use crate::preprocess::preprocess_menu;

/// Intermediate state reported to a diagnostic hook during extraction
#[derive(Debug)]
pub enum Diagnostic<'a> {
    /// Candidate tokens read from one image
    Tokens {
        image_index: usize,
        tokens: &'a [String],
    },
    /// Ingredient names matched per type
    ObservedTypes(&'a ObservedTypes),
    /// Final recipe list
    Recipes(&'a [RecipeInstance]),
}

/// Callback receiving [`Diagnostic`] events
pub type DiagnosticHook = Arc<dyn Fn(&Diagnostic<'_>) + Send + Sync>;

/// Screenshot → recipes pipeline.
///
/// Images are preprocessed and read one at a time, their tokens concatenated in
/// image order, matched against the selected profile's ingredients and finally
/// combined into recipes. The pipeline keeps no state between calls.
pub struct ExtractionPipeline {
    pub(crate) ocr: Box<dyn OcrEngine>,
    pub(crate) catalog: Box<dyn CatalogStore>,
    pub(crate) preprocess: PreprocessConfig,
    pub(crate) matching: MatchingConfig,
    pub(crate) diagnostics: Option<DiagnosticHook>,
}

impl ExtractionPipeline {
    /// Creates a new builder for configuring a pipeline
    pub fn builder() -> ExtractionPipelineBuilder {
        ExtractionPipelineBuilder::default()
    }

    /// Build a pipeline from loaded configuration: the configured OCR engine and
    /// the JSON catalog at `config.catalog.path`
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        ExtractionPipelineBuilder::from_config(config)?.build()
    }

    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    /// Catalog for a 1-based profile selector
    pub fn profile_catalog(&self, profile_selector: usize) -> Result<&ProfileCatalog> {
        match profile_selector.checked_sub(1) {
            Some(index) => self.catalog.profile(index),
            None => Err(ScanError::InvalidProfile {
                selector: profile_selector,
                available: self.catalog.profile_count(),
            }),
        }
    }

    /// Unprocessed OCR text of every binarized image, one entry per image
    pub async fn extract_raw_text(&self, images: &[DynamicImage]) -> Result<Vec<String>> {
        let mut texts = Vec::with_capacity(images.len());

        for image in images {
            let binarized = preprocess_menu(image, &self.preprocess);
            texts.push(self.ocr.recognize(&binarized).await?);
        }

        Ok(texts)
    }

    /// Reads candidate tokens from every image, in image order
    pub async fn extract_tokens(&self, images: &[DynamicImage]) -> Result<Vec<String>> {
        let mut tokens = Vec::new();

        for (image_index, image) in images.iter().enumerate() {
            let binarized = preprocess_menu(image, &self.preprocess);
            let text = self.ocr.recognize(&binarized).await?;
            let image_tokens = tokens_from_text(&text, &self.matching);

            debug!(
                "Image {}: {} tokens via {}",
                image_index,
                image_tokens.len(),
                self.ocr.engine_name()
            );
            self.emit(&Diagnostic::Tokens {
                image_index,
                tokens: &image_tokens,
            });

            tokens.extend(image_tokens);
        }

        Ok(tokens)
    }

    /// Lists the recipes craftable from the ingredients visible in `images`.
    ///
    /// `profile_selector` is 1-based. An unknown profile is an error; an empty
    /// image list returns no recipes without running OCR.
    pub async fn extract(
        &self,
        images: &[DynamicImage],
        profile_selector: usize,
    ) -> Result<Vec<RecipeInstance>> {
        let catalog = self.profile_catalog(profile_selector)?;

        if images.is_empty() {
            debug!("No images supplied, skipping OCR");
            return Ok(Vec::new());
        }

        let tokens = self.extract_tokens(images).await?;

        let observed = resolve(&tokens, &catalog.ingredients, &self.matching);
        self.emit(&Diagnostic::ObservedTypes(&observed));

        let recipes = combine(&observed, &catalog.meals);
        self.emit(&Diagnostic::Recipes(&recipes));

        info!(
            "Profile {}: {} tokens, {} ingredient types, {} recipes",
            profile_selector,
            tokens.len(),
            observed.len(),
            recipes.len()
        );

        Ok(recipes)
    }

    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        if let Some(hook) = &self.diagnostics {
            hook(diagnostic);
        }
    }
}

use crate::catalog::{CatalogStore, JsonCatalogStore};
use crate::config::{MatchingConfig, PreprocessConfig, ScanConfig};
use crate::error::{Result, ScanError};
use crate::ocr::{OcrEngine, OcrEngineFactory};
use crate::pipeline::{Diagnostic, DiagnosticHook, ExtractionPipeline};
use std::sync::Arc;

/// Builder for configuring an [`ExtractionPipeline`]
#[derive(Default)]
pub struct ExtractionPipelineBuilder {
    ocr: Option<Box<dyn OcrEngine>>,
    catalog: Option<Box<dyn CatalogStore>>,
    preprocess: PreprocessConfig,
    matching: MatchingConfig,
    diagnostics: Option<DiagnosticHook>,
}

impl ExtractionPipelineBuilder {
    /// Pre-fill the builder from configuration: OCR engine, JSON catalog,
    /// preprocessing and matching settings
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Ok(ExtractionPipelineBuilder {
            ocr: Some(OcrEngineFactory::from_config(&config.ocr)?),
            catalog: Some(Box::new(JsonCatalogStore::from_path(&config.catalog.path)?)),
            preprocess: config.preprocess,
            matching: config.matching,
            diagnostics: None,
        })
    }

    /// Set the OCR engine
    ///
    /// # Example
    /// ```
    /// use menu_recipes::{ExtractionPipeline, TesseractEngine};
    ///
    /// let builder = ExtractionPipeline::builder()
    ///     .ocr_engine(TesseractEngine::with_command("/usr/bin/tesseract"));
    /// ```
    pub fn ocr_engine(mut self, engine: impl OcrEngine + 'static) -> Self {
        self.ocr = Some(Box::new(engine));
        self
    }

    /// Set the catalog store profiles are read from
    ///
    /// # Example
    /// ```
    /// use menu_recipes::{ExtractionPipeline, MemoryCatalogStore};
    ///
    /// let builder = ExtractionPipeline::builder()
    ///     .catalog(MemoryCatalogStore::new(Vec::new()));
    /// ```
    pub fn catalog(mut self, catalog: impl CatalogStore + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    /// Override contrast and binarization threshold
    pub fn preprocess(mut self, preprocess: PreprocessConfig) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Override the edit-distance budget and noise filter length
    pub fn matching(mut self, matching: MatchingConfig) -> Self {
        self.matching = matching;
        self
    }

    /// Receive intermediate tokens, observed types and recipes
    ///
    /// # Example
    /// ```
    /// use menu_recipes::{Diagnostic, ExtractionPipeline};
    ///
    /// let builder = ExtractionPipeline::builder().diagnostics(|event: &Diagnostic<'_>| {
    ///     eprintln!("{:?}", event);
    /// });
    /// ```
    pub fn diagnostics<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Diagnostic<'_>) + Send + Sync + 'static,
    {
        self.diagnostics = Some(Arc::new(hook));
        self
    }

    /// Build the pipeline
    ///
    /// # Errors
    /// Returns `ScanError::Builder` if no OCR engine or no catalog was set.
    pub fn build(self) -> Result<ExtractionPipeline> {
        let ocr = self.ocr.ok_or_else(|| {
            ScanError::Builder("No OCR engine specified. Use .ocr_engine()".to_string())
        })?;
        let catalog = self.catalog.ok_or_else(|| {
            ScanError::Builder("No catalog specified. Use .catalog()".to_string())
        })?;

        Ok(ExtractionPipeline {
            ocr,
            catalog,
            preprocess: self.preprocess,
            matching: self.matching,
            diagnostics: self.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalogStore;
    use crate::ocr::TesseractEngine;

    #[test]
    fn test_build_requires_ocr_engine() {
        let result = ExtractionPipeline::builder()
            .catalog(MemoryCatalogStore::new(Vec::new()))
            .build();

        match result {
            Err(ScanError::Builder(message)) => assert!(message.contains("OCR engine")),
            _ => panic!("Expected builder error"),
        }
    }

    #[test]
    fn test_build_requires_catalog() {
        let result = ExtractionPipeline::builder()
            .ocr_engine(TesseractEngine::with_command("tesseract"))
            .build();

        match result {
            Err(ScanError::Builder(message)) => assert!(message.contains("catalog")),
            _ => panic!("Expected builder error"),
        }
    }

    #[test]
    fn test_build_with_overrides() {
        let pipeline = ExtractionPipeline::builder()
            .ocr_engine(TesseractEngine::with_command("tesseract"))
            .catalog(MemoryCatalogStore::new(Vec::new()))
            .preprocess(PreprocessConfig {
                contrast: 1.5,
                threshold: 200,
            })
            .matching(MatchingConfig {
                max_distance: 2,
                min_token_len: 3,
            })
            .build()
            .unwrap();

        assert_eq!(pipeline.preprocess.threshold, 200);
        assert_eq!(pipeline.matching.max_distance, 2);
        assert!(pipeline.diagnostics.is_none());
        assert_eq!(pipeline.catalog().profile_count(), 0);
    }

    #[test]
    fn test_from_config_reports_missing_catalog() {
        let mut config = ScanConfig::default();
        config.catalog.path = "/nonexistent/recipes.json".to_string();

        let result = ExtractionPipelineBuilder::from_config(&config);
        assert!(matches!(result, Err(ScanError::Catalog(_))));
    }
}

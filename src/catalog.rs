use log::{debug, info};
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::model::ProfileCatalog;
use crate::normalize::normalize_str;

/// Read-only source of profile catalogs, indexed from 0
pub trait CatalogStore: Send + Sync {
    /// Number of selectable profiles
    fn profile_count(&self) -> usize;

    /// Catalog of the profile at `index`.
    ///
    /// Returns [`ScanError::InvalidProfile`] when the index is out of range.
    fn profile(&self, index: usize) -> Result<&ProfileCatalog>;
}

/// Catalogs held in memory for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    profiles: Vec<ProfileCatalog>,
}

impl MemoryCatalogStore {
    /// Wraps the given profiles, deriving any missing `norm_name`
    pub fn new(mut profiles: Vec<ProfileCatalog>) -> Self {
        for profile in &mut profiles {
            fill_norm_names(profile);
        }
        MemoryCatalogStore { profiles }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    fn profile(&self, index: usize) -> Result<&ProfileCatalog> {
        self.profiles.get(index).ok_or(ScanError::InvalidProfile {
            selector: index + 1,
            available: self.profiles.len(),
        })
    }
}

/// Catalogs loaded once from a JSON file.
///
/// The file holds an array with one `{"ingredients": [...], "meals": [...]}`
/// object per profile.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    inner: MemoryCatalogStore,
}

impl JsonCatalogStore {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let store = Self::from_json(&content)?;
        info!(
            "Loaded {} profiles from {}",
            store.profile_count(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let profiles: Vec<ProfileCatalog> = serde_json::from_str(content)?;
        Ok(JsonCatalogStore {
            inner: MemoryCatalogStore::new(profiles),
        })
    }
}

impl CatalogStore for JsonCatalogStore {
    fn profile_count(&self) -> usize {
        self.inner.profile_count()
    }

    fn profile(&self, index: usize) -> Result<&ProfileCatalog> {
        self.inner.profile(index)
    }
}

fn fill_norm_names(profile: &mut ProfileCatalog) {
    for ingredient in &mut profile.ingredients {
        if ingredient.norm_name.is_empty() {
            ingredient.norm_name = normalize_str(&ingredient.name);
            debug!(
                "Derived norm_name {:?} for {:?}",
                ingredient.norm_name, ingredient.name
            );
        }
    }
}

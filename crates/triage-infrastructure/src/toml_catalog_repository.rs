//! TOML-based CatalogRepository implementation.

use crate::paths::TriagePaths;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;
use triage_core::catalog::{CatalogRepository, Condition, builtin_conditions, validate_catalog};
use triage_core::error::Result;

/// Root of the catalog TOML document.
///
/// ```toml
/// [[condition]]
/// name = "Flu"
/// symptoms = ["fever", "cough"]
/// questions = ["Did your symptoms come on suddenly?"]
/// description = "..."
/// severity = "moderate"
/// ```
#[derive(Debug, Default, Deserialize)]
struct CatalogRoot {
    #[serde(rename = "condition", default)]
    conditions: Vec<Condition>,
}

/// A repository that reads the condition catalog from a TOML file.
///
/// If the file does not exist, the builtin preset catalog is returned so
/// the assistant works out of the box. A file that exists but fails to
/// parse or validate is an error, never silently replaced.
pub struct TomlCatalogRepository {
    catalog_file: PathBuf,
}

impl TomlCatalogRepository {
    /// Creates a repository reading from the given file.
    pub fn new(catalog_file: impl Into<PathBuf>) -> Self {
        Self {
            catalog_file: catalog_file.into(),
        }
    }

    /// Creates a repository reading from the standard location.
    pub fn from_paths(paths: &TriagePaths) -> Self {
        Self::new(paths.catalog_file())
    }
}

#[async_trait]
impl CatalogRepository for TomlCatalogRepository {
    async fn load_all(&self) -> Result<Vec<Condition>> {
        if !self.catalog_file.exists() {
            info!(path = %self.catalog_file.display(), "no catalog file, using builtin catalog");
            return Ok(builtin_conditions().to_vec());
        }

        let content = tokio::fs::read_to_string(&self.catalog_file).await?;
        let root: CatalogRoot = toml::from_str(&content)?;
        validate_catalog(&root.conditions)?;
        info!(
            path = %self.catalog_file.display(),
            conditions = root.conditions.len(),
            "catalog loaded"
        );
        Ok(root.conditions)
    }
}

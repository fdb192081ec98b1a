//! Condition catalog repository trait.
//!
//! Defines the interface for loading the condition catalog.

use super::model::Condition;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract source of the condition catalog.
///
/// This trait decouples the triage logic from the storage mechanism
/// (e.g., TOML files, builtin presets, a remote service). The catalog is
/// loaded once at startup and consumed read-only afterwards.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads every condition in the catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Condition>)`: the validated catalog, in storage order
    /// - `Err(_)`: the catalog could not be read or is structurally invalid
    async fn load_all(&self) -> Result<Vec<Condition>>;
}

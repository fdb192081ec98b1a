//! Condition catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Catalog domain model (`Condition`, `Severity`) and validation
//! - `repository`: Repository trait for catalog loading
//! - `preset`: Builtin catalog used when no data file is present

mod model;
mod preset;
mod repository;

pub use model::{Condition, Severity, validate_catalog};
pub use preset::builtin_conditions;
pub use repository::CatalogRepository;

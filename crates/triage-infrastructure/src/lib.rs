//! Storage implementations for the triage assistant.
//!
//! Implements the traits `triage-core` defines at its seams: the TOML
//! condition catalog, the per-conversation TOML session store, and the
//! append-only diagnosis log file.

pub mod diagnosis_log;
pub mod paths;
pub mod toml_catalog_repository;
pub mod toml_session_repository;

pub use crate::diagnosis_log::FileDiagnosisLog;
pub use crate::paths::TriagePaths;
pub use crate::toml_catalog_repository::TomlCatalogRepository;
pub use crate::toml_session_repository::TomlSessionRepository;

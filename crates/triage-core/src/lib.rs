//! Core domain logic for the conversational symptom-triage assistant.
//!
//! The flow: free text → [`extract`] symptom tokens → [`matcher`] selects
//! candidate conditions → [`planner`] builds the follow-up question queue
//! → the [`session`] state machine collects one yes/no answer per turn →
//! [`resolver`] produces the final diagnosis.
//!
//! This crate contains no I/O beyond the traits it defines
//! ([`catalog::CatalogRepository`], [`session::SessionStore`],
//! [`sink::DiagnosisLog`]); implementations live in
//! `triage-infrastructure`.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod planner;
pub mod resolver;
pub mod session;
pub mod settings;
pub mod sink;
pub mod tally;

// Re-export common error type
pub use error::TriageError;

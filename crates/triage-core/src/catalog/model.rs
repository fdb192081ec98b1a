//! Condition catalog domain model.
//!
//! A `Condition` is a named ailment record with the symptoms that suggest
//! it and the yes/no questions used to confirm or rule it out.

use serde::{Deserialize, Serialize};
use strum::Display;

/// How serious a condition is considered when presenting a diagnosis.
///
/// Only the diagnosis formatter looks at this; it plays no role in
/// matching or scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// A named illness/ailment record in the condition catalog.
///
/// Conditions are loaded once at startup and treated as immutable for the
/// duration of every session. `name` is the identity and must be unique
/// within the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Unique condition name (catalog identity)
    pub name: String,
    /// Symptoms that suggest this condition (matched case-insensitively)
    pub symptoms: Vec<String>,
    /// Yes/no follow-up questions, in catalog order
    pub questions: Vec<String>,
    /// Human-readable description shown in the diagnosis
    pub description: String,
    /// Severity shown in the diagnosis, if known
    #[serde(default)]
    pub severity: Option<Severity>,
    /// Advice shown in the diagnosis, if any
    #[serde(default)]
    pub advice: Option<String>,
}

impl Condition {
    /// Returns this condition's symptoms lowercased, for case-insensitive
    /// comparison against extracted symptom tokens.
    pub fn normalized_symptoms(&self) -> Vec<String> {
        self.symptoms.iter().map(|s| s.to_lowercase()).collect()
    }
}

/// Validates a loaded catalog.
///
/// A condition with an empty name or a duplicated name makes the catalog
/// structurally invalid. This is checked once at load time so session
/// logic can rely on names as identities.
///
/// # Errors
///
/// Returns a `Config` error describing the first violation found.
pub fn validate_catalog(conditions: &[Condition]) -> crate::error::Result<()> {
    use crate::error::TriageError;
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for condition in conditions {
        if condition.name.trim().is_empty() {
            return Err(TriageError::config("catalog contains a condition with an empty name"));
        }
        if !seen.insert(condition.name.as_str()) {
            return Err(TriageError::config(format!(
                "catalog contains duplicate condition name '{}'",
                condition.name
            )));
        }
    }
    Ok(())
}

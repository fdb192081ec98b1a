//! Triage behavior settings.

use serde::{Deserialize, Serialize};

/// Thresholds that drive early exits in the follow-up phase.
///
/// The defaults reproduce the standard behavior: three confirming answers
/// diagnose a condition immediately, two disconfirming answers retire its
/// remaining questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSettings {
    /// "yes" answers needed to confirm a condition early
    #[serde(default = "default_confirm_threshold")]
    pub confirm_threshold: u32,
    /// "no" answers after which a condition's questions are skipped
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: u32,
}

fn default_confirm_threshold() -> u32 {
    3
}

fn default_negative_threshold() -> u32 {
    2
}

impl Default for TriageSettings {
    fn default() -> Self {
        Self {
            confirm_threshold: default_confirm_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

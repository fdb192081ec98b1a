//! Session phase types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The phase a triage session is in.
///
/// Phases only ever move forward: `SymptomInput` → `FollowUp` → `Done`.
/// No transition leaves `Done`; a new session must be started for another
/// triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting for a free-text symptom description.
    SymptomInput,
    /// Asking yes/no follow-up questions.
    FollowUp,
    /// Terminal: a diagnosis (or no-diagnosis) was produced.
    Done,
}

//! Triage session domain model.
//!
//! This module contains the core `TriageSession` entity that carries the
//! state of one user's triage across turns.

use super::answer::Answer;
use super::phase::Phase;
use crate::catalog::Condition;
use crate::planner::QuestionPlan;
use crate::tally::Tally;
use serde::{Deserialize, Serialize};

/// One recorded question/answer pair.
///
/// The interaction log is append-only and used for audit only; it never
/// feeds back into matching or scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: Answer,
}

/// The state of one triage session.
///
/// A session aggregates:
/// - the current phase (`SymptomInput` → `FollowUp` → `Done`)
/// - the conditions matched from the user's symptom description
/// - the shuffled follow-up plan (question queue + owner map)
/// - the per-condition answer tallies
/// - a cursor into the question queue
/// - the append-only question/answer log
///
/// Created at chat start, mutated turn by turn, terminal at phase `Done`.
/// The queue and owner map are immutable after planning; only the cursor
/// advances, monotonically, within `[0, queue.len()]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
    /// Current session phase
    pub phase: Phase,
    /// Index of the next question to ask
    #[serde(default)]
    pub cursor: usize,
    /// Conditions matched for this session, in catalog order
    #[serde(default)]
    pub matched: Vec<Condition>,
    /// Follow-up question plan (queue + owner map)
    #[serde(default)]
    pub plan: QuestionPlan,
    /// Per-condition confirm/negative tallies
    #[serde(default)]
    pub tally: Tally,
    /// Append-only interaction log (audit only)
    #[serde(default)]
    pub qa_log: Vec<QaRecord>,
}

impl TriageSession {
    /// Creates a fresh session in the `SymptomInput` phase.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now.clone(),
            updated_at: now,
            phase: Phase::SymptomInput,
            cursor: 0,
            matched: Vec::new(),
            plan: QuestionPlan::default(),
            tally: Tally::new(),
            qa_log: Vec::new(),
        }
    }

    /// Marks the session as updated now.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    /// Looks up a matched condition by name.
    pub fn find_matched(&self, name: &str) -> Option<&Condition> {
        self.matched.iter().find(|c| c.name == name)
    }
}

impl Default for TriageSession {
    fn default() -> Self {
        Self::new()
    }
}

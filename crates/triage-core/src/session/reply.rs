//! Turn outcome types.

use serde::{Deserialize, Serialize};

/// The outcome of processing one user message.
///
/// Every branch of the state machine is an explicit variant so callers
/// (and tests) can enumerate transitions instead of inspecting message
/// text: `Question` advances the follow-up, `Reprompt` and `NoMatch`
/// hold the current phase, `Diagnosis` terminates the session, and
/// `SessionOver` answers input arriving after termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum TurnReply {
    /// The next follow-up question, formatted as a yes/no prompt.
    Question(String),
    /// The answer was not "yes" or "no"; nothing changed, ask again.
    Reprompt(String),
    /// Symptom input produced no usable candidates; the user may retry.
    NoMatch(String),
    /// Final formatted diagnosis (or no-clear-diagnosis) message.
    Diagnosis(String),
    /// The session is already done; a new session must be started.
    SessionOver(String),
}

impl TurnReply {
    /// The user-facing message carried by this reply.
    pub fn message(&self) -> &str {
        match self {
            TurnReply::Question(m)
            | TurnReply::Reprompt(m)
            | TurnReply::NoMatch(m)
            | TurnReply::Diagnosis(m)
            | TurnReply::SessionOver(m) => m,
        }
    }

    /// True for replies that end the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnReply::Diagnosis(_))
    }
}

//! User answer types for the follow-up phase.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A yes/no answer to a follow-up question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

/// Raised when user input is not exactly "yes" or "no" after
/// normalization; the session re-prompts instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAnswer;

impl FromStr for Answer {
    type Err = InvalidAnswer;

    /// Parses an answer, accepting exactly `"yes"` or `"no"` after
    /// trimming and lowercasing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            _ => Err(InvalidAnswer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_exact_answers() {
        assert_eq!("yes".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!("no".parse::<Answer>(), Ok(Answer::No));
    }

    #[test]
    fn test_normalizes_whitespace_and_case() {
        assert_eq!("  YES ".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!("No\n".parse::<Answer>(), Ok(Answer::No));
    }

    #[test]
    fn test_rejects_anything_else() {
        assert_eq!("maybe".parse::<Answer>(), Err(InvalidAnswer));
        assert_eq!("y".parse::<Answer>(), Err(InvalidAnswer));
        assert_eq!("yes please".parse::<Answer>(), Err(InvalidAnswer));
        assert_eq!("".parse::<Answer>(), Err(InvalidAnswer));
    }
}

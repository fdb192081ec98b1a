//! Per-condition answer tallies.

use crate::session::Answer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running counts of confirming and disconfirming answers per condition.
///
/// Both maps are sparse: an absent condition name means a count of zero,
/// made explicit by the accessors. Counts only ever increase; a tally is
/// reset by starting a new session, never in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// Condition name → number of "yes" answers attributed to it
    confirmed: HashMap<String, u32>,
    /// Condition name → number of "no" answers attributed to it
    negatives: HashMap<String, u32>,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answer attributed to `condition_name`.
    pub fn record(&mut self, condition_name: &str, answer: Answer) {
        let map = match answer {
            Answer::Yes => &mut self.confirmed,
            Answer::No => &mut self.negatives,
        };
        *map.entry(condition_name.to_string()).or_insert(0) += 1;
    }

    /// Number of "yes" answers for a condition (zero if never answered).
    pub fn confirmed_count(&self, condition_name: &str) -> u32 {
        self.confirmed.get(condition_name).copied().unwrap_or(0)
    }

    /// Number of "no" answers for a condition (zero if never answered).
    pub fn negative_count(&self, condition_name: &str) -> u32 {
        self.negatives.get(condition_name).copied().unwrap_or(0)
    }

    /// The confirmed-count map, for final diagnosis resolution.
    pub fn confirmed(&self) -> &HashMap<String, u32> {
        &self.confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_condition_counts_as_zero() {
        let tally = Tally::new();
        assert_eq!(tally.confirmed_count("Flu"), 0);
        assert_eq!(tally.negative_count("Flu"), 0);
    }

    #[test]
    fn test_record_increments_the_right_map() {
        let mut tally = Tally::new();

        tally.record("Flu", Answer::Yes);
        tally.record("Flu", Answer::Yes);
        tally.record("Flu", Answer::No);
        tally.record("Cold", Answer::No);

        assert_eq!(tally.confirmed_count("Flu"), 2);
        assert_eq!(tally.negative_count("Flu"), 1);
        assert_eq!(tally.confirmed_count("Cold"), 0);
        assert_eq!(tally.negative_count("Cold"), 1);
    }

    #[test]
    fn test_counts_never_decrease() {
        let mut tally = Tally::new();

        for _ in 0..5 {
            tally.record("Flu", Answer::Yes);
        }

        assert_eq!(tally.confirmed_count("Flu"), 5);
    }
}

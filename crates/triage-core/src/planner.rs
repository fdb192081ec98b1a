//! Follow-up question planning.
//!
//! Builds the deduplicated question queue for a session and the map from
//! each question to the condition it confirms or rules out.

use crate::catalog::Condition;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The follow-up plan for one session: a shuffled queue of distinct
/// questions plus the question → owning-condition attribution map.
///
/// Invariant: every question in `queue` has an entry in `owners`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionPlan {
    /// Distinct follow-up questions, randomly permuted
    pub queue: Vec<String>,
    /// Question → name of the condition that first offered it
    pub owners: HashMap<String, String>,
}

impl QuestionPlan {
    /// True when no matched condition offered any question.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Derives the follow-up plan from the matched conditions.
///
/// Questions are collected in matched-condition order, dedup'd on first
/// occurrence (the owner map binds a shared question to the first
/// condition offering it), then uniformly shuffled so the session does
/// not always probe the same condition first. The randomness source is
/// injected so tests can fix the order.
pub fn plan<R: Rng + ?Sized>(matched: &[Condition], rng: &mut R) -> QuestionPlan {
    let mut queue: Vec<String> = Vec::new();
    let mut owners: HashMap<String, String> = HashMap::new();

    for condition in matched {
        for question in &condition.questions {
            if !owners.contains_key(question) {
                queue.push(question.clone());
                owners.insert(question.clone(), condition.name.clone());
            }
        }
    }

    queue.shuffle(rng);

    QuestionPlan { queue, owners }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn condition(name: &str, questions: &[&str]) -> Condition {
        Condition {
            name: name.to_string(),
            symptoms: vec![],
            questions: questions.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            severity: None,
            advice: None,
        }
    }

    #[test]
    fn test_queue_has_no_duplicates() {
        let matched = vec![
            condition("A", &["q1", "q2", "shared"]),
            condition("B", &["shared", "q3"]),
        ];

        let plan = plan(&matched, &mut StdRng::seed_from_u64(1));

        let distinct: BTreeSet<&String> = plan.queue.iter().collect();
        assert_eq!(plan.queue.len(), 4);
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_shared_question_owned_by_first_condition() {
        let matched = vec![
            condition("A", &["shared"]),
            condition("B", &["shared", "q3"]),
        ];

        let plan = plan(&matched, &mut StdRng::seed_from_u64(1));

        assert_eq!(plan.owners.get("shared").map(String::as_str), Some("A"));
        assert_eq!(plan.owners.get("q3").map(String::as_str), Some("B"));
    }

    #[test]
    fn test_every_question_has_an_owner() {
        let matched = vec![
            condition("A", &["q1", "q2"]),
            condition("B", &["q3", "q4"]),
        ];

        let plan = plan(&matched, &mut StdRng::seed_from_u64(7));

        for question in &plan.queue {
            assert!(plan.owners.contains_key(question));
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let matched = vec![condition("A", &["q1", "q2", "q3", "q4", "q5"])];

        let plan = plan(&matched, &mut StdRng::seed_from_u64(42));

        let mut sorted = plan.queue.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["q1", "q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn test_no_questions_yields_empty_plan() {
        let matched = vec![condition("A", &[])];

        let plan = plan(&matched, &mut StdRng::seed_from_u64(1));

        assert!(plan.is_empty());
        assert!(plan.owners.is_empty());
    }
}

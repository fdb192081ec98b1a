//! Symptom-to-condition matching.
//!
//! Two-tier matching: conditions covering every reported symptom win
//! outright; otherwise any condition sharing at least one symptom is a
//! candidate. Catalog order is preserved, no ranking is applied.

use crate::catalog::Condition;
use crate::extract::SymptomSet;

/// Selects candidate conditions for a set of extracted symptom tokens.
///
/// 1. ALL-match tier: every condition whose symptom set contains each
///    reported token (case-insensitive). If any condition qualifies, only
///    those are returned.
/// 2. ANY-match tier: otherwise, every condition sharing at least one
///    token with the input.
///
/// An empty input or an empty intersection yields an empty result, which
/// signals "no relevant conditions" upstream.
pub fn match_conditions(symptoms: &SymptomSet, catalog: &[Condition]) -> Vec<Condition> {
    if symptoms.is_empty() {
        return Vec::new();
    }

    let all_match: Vec<Condition> = catalog
        .iter()
        .filter(|cond| {
            let cond_syms = cond.normalized_symptoms();
            symptoms.iter().all(|sym| cond_syms.contains(sym))
        })
        .cloned()
        .collect();

    if !all_match.is_empty() {
        return all_match;
    }

    catalog
        .iter()
        .filter(|cond| {
            let cond_syms = cond.normalized_symptoms();
            symptoms.iter().any(|sym| cond_syms.contains(sym))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(name: &str, symptoms: &[&str]) -> Condition {
        Condition {
            name: name.to_string(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            questions: vec![],
            description: String::new(),
            severity: None,
            advice: None,
        }
    }

    fn symptom_set(tokens: &[&str]) -> SymptomSet {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_match_tier_wins() {
        let catalog = vec![
            condition("A", &["fever", "cough", "fatigue"]),
            condition("B", &["fever", "headache"]),
        ];

        let matched = match_conditions(&symptom_set(&["fever", "cough"]), &catalog);

        // A covers both tokens; B only shares "fever" and must not appear.
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "A");
    }

    #[test]
    fn test_falls_back_to_any_match() {
        let catalog = vec![
            condition("A", &["fever", "cough"]),
            condition("B", &["headache", "nausea"]),
            condition("C", &["dizziness"]),
        ];

        let matched = match_conditions(&symptom_set(&["fever", "headache"]), &catalog);

        let names: Vec<&str> = matched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_on_catalog() {
        let catalog = vec![condition("A", &["Fever", "Cough"])];

        let matched = match_conditions(&symptom_set(&["fever"]), &catalog);

        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        let catalog = vec![condition("A", &["fever"])];

        assert!(match_conditions(&SymptomSet::new(), &catalog).is_empty());
    }

    #[test]
    fn test_no_intersection_matches_nothing() {
        let catalog = vec![condition("A", &["fever"])];

        assert!(match_conditions(&symptom_set(&["rash"]), &catalog).is_empty());
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let catalog = vec![
            condition("B", &["fever"]),
            condition("A", &["fever"]),
        ];

        let matched = match_conditions(&symptom_set(&["fever"]), &catalog);

        let names: Vec<&str> = matched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}

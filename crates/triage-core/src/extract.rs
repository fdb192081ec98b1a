//! Symptom extraction from free-text user messages.
//!
//! Extraction is an opaque step as far as the state machine is concerned:
//! it turns one user message into a set of normalized symptom tokens, and
//! may return an empty set to signal "nothing understood".

use crate::catalog::Condition;
use crate::error::Result;
use regex::Regex;
use std::collections::BTreeSet;

/// A set of normalized (lowercased) symptom tokens extracted from one
/// user message. Transient, owned by the current turn.
pub type SymptomSet = BTreeSet<String>;

/// Extracts normalized symptom tokens from free text.
pub trait SymptomExtractor: Send + Sync {
    /// Returns the symptom tokens recognized in `text`.
    ///
    /// An empty set means nothing was understood.
    fn extract(&self, text: &str) -> SymptomSet;
}

/// Extractor that recognizes the symptom vocabulary of a catalog.
///
/// Every distinct symptom phrase across the catalog becomes a pattern
/// matched case-insensitively on word boundaries, so "splitting headache"
/// yields `headache` but "headache" is not found inside unrelated words.
#[derive(Debug)]
pub struct VocabularyExtractor {
    /// (normalized phrase, compiled matcher) pairs
    patterns: Vec<(String, Regex)>,
}

impl VocabularyExtractor {
    /// Builds an extractor from the catalog's symptom vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error if a symptom phrase produces an invalid
    /// pattern, which cannot happen for escaped input in practice.
    pub fn from_catalog(catalog: &[Condition]) -> Result<Self> {
        let mut phrases: BTreeSet<String> = BTreeSet::new();
        for condition in catalog {
            for symptom in &condition.symptoms {
                let normalized = symptom.trim().to_lowercase();
                if !normalized.is_empty() {
                    phrases.insert(normalized);
                }
            }
        }

        let mut patterns = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let pattern = format!(r"\b{}\b", regex::escape(&phrase));
            let regex = Regex::new(&pattern).map_err(|e| {
                crate::error::TriageError::internal(format!(
                    "invalid symptom pattern for '{}': {}",
                    phrase, e
                ))
            })?;
            patterns.push((phrase, regex));
        }

        Ok(Self { patterns })
    }
}

impl SymptomExtractor for VocabularyExtractor {
    fn extract(&self, text: &str) -> SymptomSet {
        let text = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(&text))
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }
}

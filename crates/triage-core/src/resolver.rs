//! Final diagnosis resolution and formatting.

use crate::catalog::Condition;
use std::collections::HashMap;

/// Disclaimer appended to every diagnosis message.
const DISCLAIMER: &str =
    "Note: this is not medical advice. Please consult a healthcare professional.";

/// Picks the winning condition from the final confirmed tallies.
///
/// Iterates `matched` in order and keeps the first condition whose
/// confirmed count strictly exceeds the running maximum. Ties therefore
/// resolve to the earlier condition in matched order, and conditions with
/// zero confirmations never win. `None` means no clear diagnosis.
pub fn resolve<'a>(
    confirmed: &HashMap<String, u32>,
    matched: &'a [Condition],
) -> Option<&'a Condition> {
    let mut best: Option<&Condition> = None;
    let mut best_count = 0u32;

    for condition in matched {
        let count = confirmed.get(&condition.name).copied().unwrap_or(0);
        if count > best_count {
            best = Some(condition);
            best_count = count;
        }
    }

    best
}

/// Formats the diagnosis message for a condition.
///
/// The same structure is used for early confirmation and for resolution
/// at queue exhaustion.
pub fn format_diagnosis(condition: &Condition) -> String {
    let mut lines = vec![
        format!("Based on your answers, you may have: {}", condition.name),
        condition.description.clone(),
    ];
    if let Some(severity) = condition.severity {
        lines.push(format!("Severity: {}", severity));
    }
    if let Some(advice) = &condition.advice {
        lines.push(format!("Advice: {}", advice));
    }
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

/// Formats the "no clear diagnosis" message.
pub fn format_no_diagnosis() -> String {
    format!(
        "I couldn't reach a clear diagnosis from your answers. \
         Please consider describing your symptoms again or seeing a doctor.\n{}",
        DISCLAIMER
    )
}

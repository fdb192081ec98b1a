//! Builtin condition catalog provided by the system.
//!
//! These conditions make the assistant usable out of the box when no
//! catalog file is present. They are initialized once and cached for the
//! lifetime of the application.

use super::model::{Condition, Severity};
use std::sync::OnceLock;

/// Static storage for the builtin catalog (initialized once).
static BUILTIN_CONDITIONS: OnceLock<Vec<Condition>> = OnceLock::new();

fn condition(
    name: &str,
    symptoms: &[&str],
    questions: &[&str],
    description: &str,
    severity: Severity,
    advice: &str,
) -> Condition {
    Condition {
        name: name.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        questions: questions.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        severity: Some(severity),
        advice: Some(advice.to_string()),
    }
}

/// Returns a reference to the builtin condition catalog.
///
/// The catalog is initialized on first access and cached for subsequent
/// calls. Every entry has a unique, non-empty name and at least three
/// questions, so a condition can be confirmed early on its own answers.
pub fn builtin_conditions() -> &'static [Condition] {
    BUILTIN_CONDITIONS.get_or_init(|| {
        vec![
            condition(
                "Flu",
                &["fever", "cough", "fatigue", "body aches", "chills"],
                &[
                    "Did your symptoms come on suddenly?",
                    "Do you have a temperature above 38°C?",
                    "Are your muscles aching all over?",
                    "Do you feel too exhausted for daily activities?",
                ],
                "Influenza is a viral infection of the respiratory tract that usually \
                 resolves within one to two weeks.",
                Severity::Moderate,
                "Rest, drink plenty of fluids, and see a doctor if symptoms worsen after three days.",
            ),
            condition(
                "Common Cold",
                &["cough", "runny nose", "sneezing", "sore throat", "congestion"],
                &[
                    "Is your nose runny or blocked?",
                    "Are you sneezing frequently?",
                    "Is your throat scratchy rather than very painful?",
                    "Did your symptoms build up over a couple of days?",
                ],
                "The common cold is a mild viral infection of the nose and throat.",
                Severity::Mild,
                "Rest and over-the-counter remedies are usually enough; no antibiotics needed.",
            ),
            condition(
                "Migraine",
                &["headache", "nausea", "sensitivity to light", "dizziness"],
                &[
                    "Is the pain on one side of your head?",
                    "Does light or noise make the pain worse?",
                    "Does the headache throb or pulse?",
                    "Have you had similar headaches before?",
                ],
                "Migraine is a recurring headache disorder often accompanied by nausea \
                 and sensitivity to light or sound.",
                Severity::Moderate,
                "Rest in a dark, quiet room; consult a doctor about preventive treatment if attacks recur.",
            ),
            condition(
                "Food Poisoning",
                &["nausea", "vomiting", "diarrhea", "stomach pain", "fever"],
                &[
                    "Did you eat something unusual in the last 24 hours?",
                    "Have you vomited more than once?",
                    "Do you have stomach cramps?",
                    "Is anyone who shared the meal also unwell?",
                ],
                "Food poisoning is an illness caused by contaminated food, typically \
                 resolving within a few days.",
                Severity::Moderate,
                "Sip fluids to avoid dehydration and seek care if symptoms persist beyond 48 hours.",
            ),
            condition(
                "Allergic Rhinitis",
                &["sneezing", "runny nose", "itchy eyes", "congestion"],
                &[
                    "Are your eyes itchy or watery?",
                    "Do symptoms flare up outdoors or around dust or pets?",
                    "Do your symptoms last longer than two weeks?",
                ],
                "Allergic rhinitis (hay fever) is an allergic reaction causing cold-like \
                 nasal symptoms without infection.",
                Severity::Mild,
                "Avoid known triggers; antihistamines usually relieve symptoms.",
            ),
            condition(
                "Strep Throat",
                &["sore throat", "fever", "swollen glands", "headache"],
                &[
                    "Is it painful to swallow?",
                    "Are the glands in your neck swollen or tender?",
                    "Is your throat red with white patches?",
                ],
                "Strep throat is a bacterial throat infection that may need antibiotic \
                 treatment.",
                Severity::Severe,
                "See a doctor for a throat swab; untreated strep can lead to complications.",
            ),
        ]
    })
}

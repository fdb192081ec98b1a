//! The triage state machine.
//!
//! `TriageEngine` drives one session through its phases: a free-text
//! symptom description selects candidate conditions and builds the
//! follow-up plan, then one yes/no answer per turn updates the tallies
//! until a condition is confirmed early or the queue is exhausted.

use super::answer::Answer;
use super::model::{QaRecord, TriageSession};
use super::phase::Phase;
use super::reply::TurnReply;
use crate::catalog::{Condition, validate_catalog};
use crate::error::{Result, TriageError};
use crate::extract::SymptomExtractor;
use crate::matcher::match_conditions;
use crate::planner;
use crate::resolver::{format_diagnosis, format_no_diagnosis, resolve};
use crate::settings::TriageSettings;
use crate::tally::Tally;
use rand::Rng;
use tracing::debug;

const MSG_NO_SYMPTOMS: &str = "I couldn't understand your symptoms. Please try again.";
const MSG_NO_CONDITIONS: &str = "No relevant conditions found for your symptoms.";
const MSG_NO_QUESTIONS: &str = "No questions found for the matched conditions.";
const MSG_REPROMPT: &str = "Please answer with 'yes' or 'no'.";
const MSG_SESSION_OVER: &str =
    "This session is complete. Start a new session to describe other symptoms.";

/// Formats a queued question as a yes/no prompt.
fn question_prompt(question: &str) -> String {
    format!("{} (yes/no)", question)
}

/// Drives triage sessions over a fixed catalog.
///
/// The engine itself is stateless across turns; all per-conversation
/// state lives in the `TriageSession` passed to [`handle_turn`]. The
/// randomness source for queue shuffling is injected per call so tests
/// can fix the question order.
///
/// [`handle_turn`]: TriageEngine::handle_turn
#[derive(Debug)]
pub struct TriageEngine<E: SymptomExtractor> {
    catalog: Vec<Condition>,
    extractor: E,
    settings: TriageSettings,
}

impl<E: SymptomExtractor> TriageEngine<E> {
    /// Creates an engine over a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the catalog is structurally invalid
    /// (empty or duplicate condition name).
    pub fn new(catalog: Vec<Condition>, extractor: E, settings: TriageSettings) -> Result<Self> {
        validate_catalog(&catalog)?;
        Ok(Self {
            catalog,
            extractor,
            settings,
        })
    }

    /// The catalog this engine triages against.
    pub fn catalog(&self) -> &[Condition] {
        &self.catalog
    }

    /// Processes one user message against a session.
    ///
    /// Exactly one reply is produced per message. User-recoverable
    /// failures (nothing extracted, no matches, malformed answers) are
    /// ordinary reply variants, never errors.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` only for corrupted session state:
    /// a cursor outside the queue, a queued question without an owner,
    /// or an owner missing from the matched-conditions list.
    pub fn handle_turn<R: Rng + ?Sized>(
        &self,
        session: &mut TriageSession,
        input: &str,
        rng: &mut R,
    ) -> Result<TurnReply> {
        match session.phase {
            Phase::SymptomInput => self.handle_symptom_input(session, input, rng),
            Phase::FollowUp => self.handle_followup(session, input),
            Phase::Done => Ok(TurnReply::SessionOver(MSG_SESSION_OVER.to_string())),
        }
    }

    /// Symptom-input phase: extract, match, plan.
    ///
    /// Any empty stage leaves the session untouched so the user may
    /// simply retry with a different description.
    fn handle_symptom_input<R: Rng + ?Sized>(
        &self,
        session: &mut TriageSession,
        input: &str,
        rng: &mut R,
    ) -> Result<TurnReply> {
        let symptoms = self.extractor.extract(input);
        if symptoms.is_empty() {
            debug!(session_id = %session.id, "no symptoms extracted");
            return Ok(TurnReply::NoMatch(MSG_NO_SYMPTOMS.to_string()));
        }

        let matched = match_conditions(&symptoms, &self.catalog);
        if matched.is_empty() {
            debug!(session_id = %session.id, ?symptoms, "no conditions matched");
            return Ok(TurnReply::NoMatch(MSG_NO_CONDITIONS.to_string()));
        }

        let plan = planner::plan(&matched, rng);
        if plan.is_empty() {
            debug!(session_id = %session.id, "matched conditions offer no questions");
            return Ok(TurnReply::NoMatch(MSG_NO_QUESTIONS.to_string()));
        }

        debug!(
            session_id = %session.id,
            conditions = matched.len(),
            questions = plan.queue.len(),
            "entering follow-up phase"
        );

        let first = plan
            .queue
            .first()
            .cloned()
            .ok_or_else(|| TriageError::invariant("planned queue is empty"))?;

        session.matched = matched;
        session.plan = plan;
        session.tally = Tally::new();
        session.cursor = 0;
        session.phase = Phase::FollowUp;
        session.touch();

        Ok(TurnReply::Question(question_prompt(&first)))
    }

    /// Follow-up phase: record one yes/no answer, then either confirm
    /// early, skip ahead, ask the next question, or resolve.
    fn handle_followup(&self, session: &mut TriageSession, input: &str) -> Result<TurnReply> {
        let Ok(answer) = input.parse::<Answer>() else {
            return Ok(TurnReply::Reprompt(MSG_REPROMPT.to_string()));
        };

        let question = session
            .plan
            .queue
            .get(session.cursor)
            .cloned()
            .ok_or_else(|| {
                TriageError::invariant(format!(
                    "cursor {} outside question queue of length {}",
                    session.cursor,
                    session.plan.queue.len()
                ))
            })?;
        let owner = self.owner_of(session, &question)?;

        session.qa_log.push(QaRecord {
            question,
            answer,
        });
        session.tally.record(&owner, answer);
        session.touch();

        // Early confirmation: enough "yes" answers settle the diagnosis
        // immediately, remaining questions are never asked.
        if session.tally.confirmed_count(&owner) >= self.settings.confirm_threshold {
            let condition = session.find_matched(&owner).ok_or_else(|| {
                TriageError::invariant(format!("confirmed condition '{}' not in matched list", owner))
            })?;
            let text = format_diagnosis(condition);
            debug!(session_id = %session.id, condition = %owner, "early confirmation");
            session.phase = Phase::Done;
            session.touch();
            return Ok(TurnReply::Diagnosis(text));
        }

        // Skip rule: advance past every remaining question whose owner has
        // already been disconfirmed twice, without consuming a turn.
        loop {
            session.cursor += 1;
            if session.cursor >= session.plan.queue.len() {
                break;
            }
            let next_question = session.plan.queue[session.cursor].clone();
            let next_owner = self.owner_of(session, &next_question)?;
            if session.tally.negative_count(&next_owner) < self.settings.negative_threshold {
                break;
            }
            debug!(session_id = %session.id, condition = %next_owner, "skipping retired question");
        }

        if let Some(next) = session.plan.queue.get(session.cursor) {
            return Ok(TurnReply::Question(question_prompt(next)));
        }

        // Queue exhausted: resolve from the final tallies.
        let text = resolve(session.tally.confirmed(), &session.matched)
            .map(format_diagnosis)
            .unwrap_or_else(format_no_diagnosis);
        debug!(session_id = %session.id, "queue exhausted, resolving");
        session.phase = Phase::Done;
        session.touch();
        Ok(TurnReply::Diagnosis(text))
    }

    /// Resolves the owning condition name for a queued question.
    fn owner_of(&self, session: &TriageSession, question: &str) -> Result<String> {
        session
            .plan
            .owners
            .get(question)
            .cloned()
            .ok_or_else(|| {
                TriageError::invariant(format!("question '{}' has no owning condition", question))
            })
    }
}

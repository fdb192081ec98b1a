//! Triage service: wires the engine to a session store and log sink.

use super::engine::TriageEngine;
use super::model::TriageSession;
use super::reply::TurnReply;
use super::store::SessionStore;
use crate::error::Result;
use crate::extract::SymptomExtractor;
use crate::sink::DiagnosisLog;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Turn-based triage over durable, per-conversation sessions.
///
/// `TriageService` is responsible for:
/// - Loading (or creating) the session for a conversation key
/// - Running exactly one state-machine turn per user message
/// - Persisting the mutated session back to the store
/// - Writing the final diagnosis to the log sink, once per session
///
/// Randomization uses one process-wide `StdRng` with no seeding
/// contract; it only affects question order.
pub struct TriageService<E: SymptomExtractor> {
    engine: TriageEngine<E>,
    store: Arc<dyn SessionStore>,
    log: Arc<dyn DiagnosisLog>,
    rng: Mutex<StdRng>,
}

impl<E: SymptomExtractor> TriageService<E> {
    /// Creates a service over an engine, session store, and log sink.
    pub fn new(
        engine: TriageEngine<E>,
        store: Arc<dyn SessionStore>,
        log: Arc<dyn DiagnosisLog>,
    ) -> Self {
        Self {
            engine,
            store,
            log,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Processes one user message for a conversation.
    ///
    /// Exactly one reply is produced per message. The session is created
    /// on first contact and persisted after every turn. A `Diagnosis`
    /// reply additionally goes to the log sink; a sink failure is logged
    /// and swallowed so the user still receives the diagnosis.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the session state is
    /// corrupted (`InvariantViolation`).
    pub async fn handle_message(&self, conversation_id: &str, text: &str) -> Result<TurnReply> {
        let mut session = match self.store.get(conversation_id).await? {
            Some(session) => session,
            None => {
                let session = TriageSession::new();
                info!(conversation_id, session_id = %session.id, "starting new triage session");
                session
            }
        };

        let reply = {
            let mut rng = self.rng.lock().await;
            self.engine.handle_turn(&mut session, text, &mut *rng)?
        };

        self.store.put(conversation_id, &session).await?;

        if let TurnReply::Diagnosis(diagnosis) = &reply {
            info!(conversation_id, session_id = %session.id, "session complete");
            if let Err(e) = self.log.save(diagnosis).await {
                warn!(conversation_id, error = %e, "failed to write diagnosis log");
            }
        }

        Ok(reply)
    }

    /// Discards the stored session for a conversation, so the next
    /// message starts a fresh triage.
    pub async fn reset(&self, conversation_id: &str) -> Result<()> {
        info!(conversation_id, "resetting triage session");
        self.store.delete(conversation_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Condition;
    use crate::extract::VocabularyExtractor;
    use crate::session::{InMemorySessionStore, Phase};
    use crate::settings::TriageSettings;
    use std::sync::Mutex as StdMutex;

    /// Log sink that records every saved diagnosis.
    #[derive(Default)]
    struct RecordingLog {
        entries: StdMutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl DiagnosisLog for RecordingLog {
        async fn save(&self, text: &str) -> Result<()> {
            self.entries.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn catalog() -> Vec<Condition> {
        vec![Condition {
            name: "Flu".to_string(),
            symptoms: vec!["fever".to_string(), "cough".to_string()],
            questions: vec![
                "q1".to_string(),
                "q2".to_string(),
                "q3".to_string(),
                "q4".to_string(),
            ],
            description: "Flu description".to_string(),
            severity: None,
            advice: None,
        }]
    }

    fn service(
        store: Arc<InMemorySessionStore>,
        log: Arc<RecordingLog>,
    ) -> TriageService<VocabularyExtractor> {
        let catalog = catalog();
        let extractor = VocabularyExtractor::from_catalog(&catalog).unwrap();
        let engine = TriageEngine::new(catalog, extractor, TriageSettings::default()).unwrap();
        TriageService::new(engine, store, log)
    }

    #[tokio::test]
    async fn test_session_persists_across_turns() {
        let store = Arc::new(InMemorySessionStore::new());
        let service = service(store.clone(), Arc::new(RecordingLog::default()));

        service.handle_message("conv", "fever and cough").await.unwrap();

        let session = store.get("conv").await.unwrap().unwrap();
        assert_eq!(session.phase, Phase::FollowUp);

        service.handle_message("conv", "yes").await.unwrap();

        let session = store.get("conv").await.unwrap().unwrap();
        assert_eq!(session.tally.confirmed_count("Flu"), 1);
    }

    #[tokio::test]
    async fn test_diagnosis_is_logged_exactly_once() {
        let store = Arc::new(InMemorySessionStore::new());
        let log = Arc::new(RecordingLog::default());
        let service = service(store, log.clone());

        service.handle_message("conv", "fever and cough").await.unwrap();
        for _ in 0..3 {
            service.handle_message("conv", "yes").await.unwrap();
        }
        // Input after completion must not log again.
        let reply = service.handle_message("conv", "yes").await.unwrap();
        assert!(matches!(reply, TurnReply::SessionOver(_)));

        let entries = log.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("Flu description"));
    }

    #[tokio::test]
    async fn test_reset_allows_a_fresh_triage() {
        let store = Arc::new(InMemorySessionStore::new());
        let service = service(store.clone(), Arc::new(RecordingLog::default()));

        service.handle_message("conv", "fever").await.unwrap();
        service.reset("conv").await.unwrap();

        assert!(store.get("conv").await.unwrap().is_none());

        let reply = service.handle_message("conv", "fever").await.unwrap();
        assert!(matches!(reply, TurnReply::Question(_)));
    }

    #[tokio::test]
    async fn test_conversations_do_not_share_state() {
        let store = Arc::new(InMemorySessionStore::new());
        let service = service(store.clone(), Arc::new(RecordingLog::default()));

        service.handle_message("conv-a", "fever").await.unwrap();
        let reply = service.handle_message("conv-b", "gibberish").await.unwrap();

        assert!(matches!(reply, TurnReply::NoMatch(_)));
        let a = store.get("conv-a").await.unwrap().unwrap();
        assert_eq!(a.phase, Phase::FollowUp);
    }
}

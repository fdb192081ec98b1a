//! Diagnosis log sink trait.

use crate::error::Result;
use async_trait::async_trait;

/// An abstract sink for completed diagnoses.
///
/// Fire-and-forget: the service calls [`save`] exactly once per completed
/// session, after the final diagnosis message has been produced. Failures
/// are reported but never affect the session outcome.
///
/// [`save`]: DiagnosisLog::save
#[async_trait]
pub trait DiagnosisLog: Send + Sync {
    /// Records one final diagnosis text.
    async fn save(&self, text: &str) -> Result<()>;
}

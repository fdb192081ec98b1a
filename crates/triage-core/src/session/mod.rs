//! Triage session domain module.
//!
//! # Module Structure
//!
//! - `model`: Core session state (`TriageSession`, `QaRecord`)
//! - `phase`: Session phase enum (`Phase`)
//! - `answer`: Yes/no answer parsing (`Answer`)
//! - `reply`: Per-turn outcomes (`TurnReply`)
//! - `engine`: The state machine itself (`TriageEngine`)
//! - `store`: Session persistence trait (`SessionStore`) and in-memory store
//! - `service`: Turn orchestration over store + log sink (`TriageService`)

mod answer;
mod engine;
mod model;
mod phase;
mod reply;
mod service;
mod store;

pub use answer::{Answer, InvalidAnswer};
pub use engine::TriageEngine;
pub use model::{QaRecord, TriageSession};
pub use phase::Phase;
pub use reply::TurnReply;
pub use service::TriageService;
pub use store::{InMemorySessionStore, SessionStore};

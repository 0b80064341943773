//! Battle module - the objection practice core.
//!
//! Owns the session aggregate (transcript, objection battles, objection-flow
//! state) and the engine that orchestrates AI content generation in the
//! correct order.
//!
//! # Objection sub-flow
//!
//! `None -> ObjectionMade -> Arguing -> Ruled -> None`, with exactly one
//! objection active at a time and at most one generation request in flight.

mod case;
mod engine;
mod objection;
mod session;
mod state;
mod stats;
mod transcript;

pub use case::{
    CaseData, CaseParties, CaseType, ExaminationType, GeneratedScenario, ScenarioPreference,
    WitnessData,
};
pub use engine::BattleEngine;
pub use objection::{
    CounterArgument, JudgeRuling, Objection, ObjectionBattle, Rebuttal, RulingDecision,
};
pub use session::{BattleSession, ModePayload, SessionMode};
pub use state::{CompletionStatus, ObjectionState};
pub use stats::SessionStats;
pub use transcript::{EntryKind, TranscriptEntry};

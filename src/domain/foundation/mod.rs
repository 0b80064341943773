//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Objection Court domain.

mod court_role;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use court_role::CourtRole;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BattleId, EntryId, ObjectionId, SessionId, SessionOwner, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

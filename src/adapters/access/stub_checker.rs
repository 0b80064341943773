//! Stub implementation of ModeAccessChecker for development and testing.
//!
//! This adapter grants every mode to every owner. Replace with a real
//! implementation backed by a membership service for production.
//!
//! # Usage
//!
//! ```ignore
//! use objection_court::adapters::access::StubModeAccessChecker;
//!
//! let checker = StubModeAccessChecker::new();
//! // Or one that denies the AI-generated mode:
//! let checker = StubModeAccessChecker::denying_mode(SessionMode::AiGenerated);
//! ```

use async_trait::async_trait;

use crate::domain::battle::SessionMode;
use crate::domain::foundation::{DomainError, SessionOwner};
use crate::ports::{AccessResult, ModeAccessChecker};

/// Stub ModeAccessChecker that grants all modes by default.
///
/// For development and testing purposes only.
#[derive(Debug, Clone, Default)]
pub struct StubModeAccessChecker {
    /// Modes to deny, for testing denial flows.
    denied_modes: Vec<SessionMode>,
    /// Whether anonymous owners are restricted to scripted sessions.
    anonymous_scripted_only: bool,
}

impl StubModeAccessChecker {
    /// Create a stub that allows every mode for every owner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub that denies the given mode (for testing denial flows).
    pub fn denying_mode(mode: SessionMode) -> Self {
        Self {
            denied_modes: vec![mode],
            anonymous_scripted_only: false,
        }
    }

    /// Restrict anonymous owners to scripted sessions.
    pub fn with_anonymous_scripted_only(mut self) -> Self {
        self.anonymous_scripted_only = true;
        self
    }
}

#[async_trait]
impl ModeAccessChecker for StubModeAccessChecker {
    async fn can_use_mode(
        &self,
        owner: &SessionOwner,
        mode: SessionMode,
    ) -> Result<AccessResult, DomainError> {
        if self.denied_modes.contains(&mode) {
            return Ok(AccessResult::Denied(format!(
                "Mode {:?} requires an active subscription",
                mode
            )));
        }

        if self.anonymous_scripted_only
            && matches!(owner, SessionOwner::Anonymous)
            && mode != SessionMode::Scripted
        {
            return Ok(AccessResult::Denied(
                "Sign in to use AI-powered examination modes".to_string(),
            ));
        }

        Ok(AccessResult::Allowed)
    }
}

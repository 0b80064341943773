//! Access control port for subscription-gated examination modes.
//!
//! Identity and billing live outside this crate; the engine consumes their
//! verdict as a single allow/deny decision per mode.
//!
//! # Design
//!
//! Fail-secure: on ANY error, access is denied.

use async_trait::async_trait;

use crate::domain::battle::SessionMode;
use crate::domain::foundation::{DomainError, SessionOwner};

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    /// The owner may start a session in the requested mode.
    Allowed,
    /// Access denied, with a displayable reason.
    Denied(String),
}

impl AccessResult {
    /// Returns true when access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }
}

/// Port for checking whether a session owner may use an examination mode.
#[async_trait]
pub trait ModeAccessChecker: Send + Sync {
    /// Check if the owner can start a session in the given mode.
    async fn can_use_mode(
        &self,
        owner: &SessionOwner,
        mode: SessionMode,
    ) -> Result<AccessResult, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_is_allowed() {
        assert!(AccessResult::Allowed.is_allowed());
        assert!(!AccessResult::Denied("upgrade required".into()).is_allowed());
    }
}

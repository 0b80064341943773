//! Lifecycle status enums for the battle session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the session is in the objection sub-flow.
///
/// Exactly one objection is active at a time; the session must be back in
/// `None` before a new objection can be raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectionState {
    /// No objection pending; examination may continue.
    None,
    /// User has objected; counter-argument not yet generated.
    ObjectionMade,
    /// Counter-argument and ruling generation underway.
    Arguing,
    /// Ruling delivered; awaiting user acknowledgement.
    Ruled,
}

impl StateMachine for ObjectionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ObjectionState::*;
        matches!(
            (self, target),
            (None, ObjectionMade) | (ObjectionMade, Arguing) | (Arguing, Ruled) | (Ruled, None)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ObjectionState::*;
        match self {
            None => vec![ObjectionMade],
            ObjectionMade => vec![Arguing],
            Arguing => vec![Ruled],
            Ruled => vec![None],
        }
    }
}

/// Overall session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl CompletionStatus {
    /// Returns true while the session accepts mutation.
    pub fn is_mutable(&self) -> bool {
        matches!(self, CompletionStatus::InProgress)
    }
}

impl StateMachine for CompletionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CompletionStatus::*;
        matches!((self, target), (InProgress, Completed) | (InProgress, Abandoned))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CompletionStatus::*;
        match self {
            InProgress => vec![Completed, Abandoned],
            Completed | Abandoned => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objection_flow_is_a_cycle() {
        use ObjectionState::*;
        assert!(None.can_transition_to(&ObjectionMade));
        assert!(ObjectionMade.can_transition_to(&Arguing));
        assert!(Arguing.can_transition_to(&Ruled));
        assert!(Ruled.can_transition_to(&None));
    }

    #[test]
    fn objection_flow_rejects_skips() {
        use ObjectionState::*;
        assert!(!None.can_transition_to(&Arguing));
        assert!(!None.can_transition_to(&Ruled));
        assert!(!ObjectionMade.can_transition_to(&Ruled));
        assert!(!Arguing.can_transition_to(&None));
    }

    #[test]
    fn no_objection_state_is_terminal() {
        use ObjectionState::*;
        for state in [None, ObjectionMade, Arguing, Ruled] {
            assert!(!state.is_terminal());
        }
    }

    #[test]
    fn completed_and_abandoned_are_terminal() {
        assert!(CompletionStatus::Completed.is_terminal());
        assert!(CompletionStatus::Abandoned.is_terminal());
        assert!(!CompletionStatus::InProgress.is_terminal());
    }

    #[test]
    fn only_in_progress_is_mutable() {
        assert!(CompletionStatus::InProgress.is_mutable());
        assert!(!CompletionStatus::Completed.is_mutable());
        assert!(!CompletionStatus::Abandoned.is_mutable());
    }

    #[test]
    fn objection_state_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ObjectionState::ObjectionMade).unwrap();
        assert_eq!(json, "\"OBJECTION_MADE\"");
    }
}

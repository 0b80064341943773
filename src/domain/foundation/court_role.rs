//! Courtroom speaker roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is speaking in a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourtRole {
    /// Asks questions of the witness (AI-controlled).
    ExaminingCounsel,
    /// Answers questions (AI-controlled).
    Witness,
    /// The user's role; raises objections.
    OpposingCounsel,
    /// Issues the sustain/overrule ruling (AI-controlled).
    Judge,
}

impl CourtRole {
    /// Display label used in the transcript for this role.
    pub fn speaker_label(&self) -> &'static str {
        match self {
            CourtRole::ExaminingCounsel => "Examining Counsel",
            CourtRole::Witness => "Witness",
            CourtRole::OpposingCounsel => "You (Opposing Counsel)",
            CourtRole::Judge => "The Court",
        }
    }
}

impl fmt::Display for CourtRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.speaker_label())
    }
}

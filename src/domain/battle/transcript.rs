//! Transcript entries - the courtroom record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourtRole, EntryId, Timestamp};

/// What kind of utterance a transcript entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Question,
    Answer,
    Objection,
    Argument,
    Ruling,
    Statement,
}

impl EntryKind {
    /// Returns true for the entry kinds an objection may target.
    pub fn is_objectionable(&self) -> bool {
        matches!(self, EntryKind::Question | EntryKind::Answer)
    }
}

/// One utterance in the courtroom record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    id: EntryId,
    timestamp: Timestamp,
    role: CourtRole,
    speaker: String,
    content: String,
    kind: EntryKind,
}

impl TranscriptEntry {
    /// Creates a new entry stamped with the given timestamp.
    ///
    /// The speaker label is derived from the role; construction is the only
    /// mutation an entry ever sees.
    pub fn new(role: CourtRole, content: impl Into<String>, kind: EntryKind, at: Timestamp) -> Self {
        Self {
            id: EntryId::new(),
            timestamp: at,
            role,
            speaker: role.speaker_label().to_string(),
            content: content.into(),
            kind,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn role(&self) -> CourtRole {
        self.role
    }

    /// Display label of the speaker, e.g. "You (Opposing Counsel)".
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Formats the entry as a `speaker: content` line for prompt grounding.
    pub fn as_dialogue_line(&self) -> String {
        format!("{}: {}", self.speaker, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_derives_speaker_from_role() {
        let entry = TranscriptEntry::new(
            CourtRole::Witness,
            "I saw the car.",
            EntryKind::Answer,
            Timestamp::now(),
        );
        assert_eq!(entry.speaker(), "Witness");
        assert_eq!(entry.role(), CourtRole::Witness);
    }

    #[test]
    fn only_questions_and_answers_are_objectionable() {
        assert!(EntryKind::Question.is_objectionable());
        assert!(EntryKind::Answer.is_objectionable());
        assert!(!EntryKind::Objection.is_objectionable());
        assert!(!EntryKind::Argument.is_objectionable());
        assert!(!EntryKind::Ruling.is_objectionable());
        assert!(!EntryKind::Statement.is_objectionable());
    }

    #[test]
    fn dialogue_line_formats_speaker_and_content() {
        let entry = TranscriptEntry::new(
            CourtRole::ExaminingCounsel,
            "Where were you?",
            EntryKind::Question,
            Timestamp::now(),
        );
        assert_eq!(entry.as_dialogue_line(), "Examining Counsel: Where were you?");
    }

    #[test]
    fn entry_kind_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&EntryKind::Ruling).unwrap();
        assert_eq!(json, "\"RULING\"");
    }
}

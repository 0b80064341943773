//! Battle session aggregate.
//!
//! The session is the aggregate root of one practice run: it owns the
//! append-only transcript, the list of resolved objection battles, and the
//! objection-flow state. Only the [`BattleEngine`](super::BattleEngine)
//! mutates it; the presentation layer reads it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CourtRole, DomainError, EntryId, ErrorCode, SessionId, SessionOwner, StateMachine, Timestamp,
};
use crate::domain::ruleset::RulesetType;
use crate::domain::script::ScriptedQa;

use super::case::{CaseData, ExaminationType, GeneratedScenario};
use super::objection::ObjectionBattle;
use super::state::{CompletionStatus, ObjectionState};
use super::transcript::{EntryKind, TranscriptEntry};

/// Examination mode discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionMode {
    Scripted,
    CaseBased,
    AiGenerated,
}

/// Mode-specific session payload. Exactly one variant is present, so the
/// payload can never disagree with the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "mode")]
pub enum ModePayload {
    /// Fixed Q&A script; the session replays it in order.
    Scripted { script: Vec<ScriptedQa> },
    /// User-supplied case facts; the AI improvises testimony around them.
    CaseBased { case: CaseData },
    /// Fully AI-generated scenario.
    AiGenerated { scenario: GeneratedScenario },
}

impl ModePayload {
    /// The mode this payload belongs to.
    pub fn mode(&self) -> SessionMode {
        match self {
            ModePayload::Scripted { .. } => SessionMode::Scripted,
            ModePayload::CaseBased { .. } => SessionMode::CaseBased,
            ModePayload::AiGenerated { .. } => SessionMode::AiGenerated,
        }
    }

    /// Case context paragraph for prompt grounding. Scripted sessions have
    /// no case context.
    pub fn case_context(&self) -> Option<String> {
        match self {
            ModePayload::Scripted { .. } => None,
            ModePayload::CaseBased { case } => Some(case.context_summary()),
            ModePayload::AiGenerated { scenario } => Some(scenario.summary.clone()),
        }
    }

    /// Witness context line for prompt grounding.
    pub fn witness_context(&self) -> Option<String> {
        match self {
            ModePayload::AiGenerated { scenario } => Some(scenario.witness.context_summary()),
            _ => None,
        }
    }

    /// Examination type for dynamic modes.
    pub fn examination_type(&self) -> Option<ExaminationType> {
        match self {
            ModePayload::Scripted { .. } => None,
            ModePayload::CaseBased { case } => Some(case.examination_type),
            ModePayload::AiGenerated { scenario } => Some(scenario.case_data.examination_type),
        }
    }
}

/// Aggregate root of one practice run.
///
/// # Invariants
///
/// - The transcript is append-only; entries are never mutated or removed.
/// - Entry timestamps are monotonically non-decreasing.
/// - Battles are appended only as complete records.
/// - A completed or abandoned session accepts no further mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSession {
    id: SessionId,
    owner: SessionOwner,
    ruleset: RulesetType,
    payload: ModePayload,
    start_time: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<Timestamp>,

    transcript: Vec<TranscriptEntry>,
    objection_battles: Vec<ObjectionBattle>,
    current_state: ObjectionState,

    /// Position of the next unplayed script pair (scripted mode only).
    script_cursor: usize,
    is_active: bool,
    completion_status: CompletionStatus,
}

impl BattleSession {
    /// Creates a fresh in-progress session with an empty record.
    pub fn new(owner: SessionOwner, ruleset: RulesetType, payload: ModePayload) -> Self {
        Self {
            id: SessionId::new(),
            owner,
            ruleset,
            payload,
            start_time: Timestamp::now(),
            end_time: None,
            transcript: Vec::new(),
            objection_battles: Vec::new(),
            current_state: ObjectionState::None,
            script_cursor: 0,
            is_active: true,
            completion_status: CompletionStatus::InProgress,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn owner(&self) -> &SessionOwner {
        &self.owner
    }

    pub fn ruleset(&self) -> RulesetType {
        self.ruleset
    }

    pub fn mode(&self) -> SessionMode {
        self.payload.mode()
    }

    pub fn payload(&self) -> &ModePayload {
        &self.payload
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn objection_battles(&self) -> &[ObjectionBattle] {
        &self.objection_battles
    }

    pub fn current_state(&self) -> ObjectionState {
        self.current_state
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn completion_status(&self) -> CompletionStatus {
        self.completion_status
    }

    /// Finds a transcript entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&TranscriptEntry> {
        self.transcript.iter().find(|e| e.id() == id)
    }

    /// The most recent QUESTION or ANSWER entry, if any.
    ///
    /// Entries are totally ordered by append position, so "most recent" is
    /// the highest-index match of the reverse scan.
    pub fn last_examination_entry(&self) -> Option<&TranscriptEntry> {
        self.transcript
            .iter()
            .rev()
            .find(|e| e.kind().is_objectionable())
    }

    /// The last `n` transcript entries, oldest first, for prompt grounding.
    pub fn recent_transcript(&self, n: usize) -> Vec<TranscriptEntry> {
        let start = self.transcript.len().saturating_sub(n);
        self.transcript[start..].to_vec()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations (engine-only)
    // ─────────────────────────────────────────────────────────────────────

    /// Appends an entry to the transcript and returns its id.
    ///
    /// Stamps the entry no earlier than the previous entry so transcript
    /// timestamps never decrease.
    ///
    /// # Errors
    ///
    /// - `SessionEnded` if the session is no longer mutable
    pub fn append_entry(
        &mut self,
        role: CourtRole,
        content: impl Into<String>,
        kind: EntryKind,
    ) -> Result<EntryId, DomainError> {
        self.ensure_mutable()?;

        let mut at = Timestamp::now();
        if let Some(last) = self.transcript.last() {
            at = at.max(last.timestamp());
        }

        let entry = TranscriptEntry::new(role, content, kind, at);
        let id = entry.id();
        self.transcript.push(entry);
        Ok(id)
    }

    /// Moves the objection flow to the given state.
    ///
    /// Setting the current state again is a no-op; anything else must be a
    /// valid transition.
    ///
    /// # Errors
    ///
    /// - `SessionEnded` if the session is no longer mutable
    /// - `InvalidStateTransition` if the flow does not allow the move
    pub fn set_objection_state(&mut self, next: ObjectionState) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        if self.current_state == next {
            return Ok(());
        }
        self.current_state = self.current_state.transition_to(next).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })?;
        Ok(())
    }

    /// Takes the next unplayed script pair, advancing the cursor.
    ///
    /// Returns `None` for non-scripted sessions and once the script is
    /// exhausted.
    pub fn take_next_scripted_pair(&mut self) -> Option<ScriptedQa> {
        let ModePayload::Scripted { script } = &self.payload else {
            return None;
        };
        let pair = script.get(self.script_cursor).cloned()?;
        self.script_cursor += 1;
        Some(pair)
    }

    /// Appends a completed objection battle to the permanent record.
    ///
    /// # Errors
    ///
    /// - `SessionEnded` if the session is no longer mutable
    pub fn append_battle(&mut self, battle: ObjectionBattle) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.objection_battles.push(battle);
        Ok(())
    }

    /// Ends the session: stamps the end time, marks it completed and
    /// inactive. Terminal; no further mutation is valid afterward.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session already ended
    pub fn end(&mut self) -> Result<(), DomainError> {
        self.completion_status = self
            .completion_status
            .transition_to(CompletionStatus::Completed)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.end_time = Some(Timestamp::now());
        self.is_active = false;
        Ok(())
    }

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.completion_status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionEnded,
                "Cannot modify an ended session",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::parse_script;

    fn scripted_session() -> BattleSession {
        let script = parse_script("Q: Where were you?\nA: At the corner store.");
        BattleSession::new(
            SessionOwner::Anonymous,
            RulesetType::Fre,
            ModePayload::Scripted { script },
        )
    }

    #[test]
    fn new_session_starts_empty_and_in_progress() {
        let session = scripted_session();
        assert!(session.transcript().is_empty());
        assert!(session.objection_battles().is_empty());
        assert_eq!(session.current_state(), ObjectionState::None);
        assert_eq!(session.completion_status(), CompletionStatus::InProgress);
        assert!(session.is_active());
        assert!(session.end_time().is_none());
    }

    #[test]
    fn append_entry_keeps_timestamps_non_decreasing() {
        let mut session = scripted_session();
        session
            .append_entry(CourtRole::ExaminingCounsel, "Q1", EntryKind::Question)
            .unwrap();
        session
            .append_entry(CourtRole::Witness, "A1", EntryKind::Answer)
            .unwrap();

        let ts: Vec<_> = session.transcript().iter().map(|e| e.timestamp()).collect();
        assert!(ts[0] <= ts[1]);
    }

    #[test]
    fn last_examination_entry_skips_non_objectionable_kinds() {
        let mut session = scripted_session();
        session
            .append_entry(CourtRole::ExaminingCounsel, "Q1", EntryKind::Question)
            .unwrap();
        session
            .append_entry(CourtRole::Witness, "A1", EntryKind::Answer)
            .unwrap();
        session
            .append_entry(CourtRole::OpposingCounsel, "Objection!", EntryKind::Objection)
            .unwrap();

        let target = session.last_examination_entry().unwrap();
        assert_eq!(target.content(), "A1");
    }

    #[test]
    fn last_examination_entry_prefers_latest_question() {
        let mut session = scripted_session();
        session
            .append_entry(CourtRole::ExaminingCounsel, "Q1", EntryKind::Question)
            .unwrap();
        session
            .append_entry(CourtRole::Witness, "A1", EntryKind::Answer)
            .unwrap();
        session
            .append_entry(CourtRole::ExaminingCounsel, "Q2", EntryKind::Question)
            .unwrap();

        assert_eq!(session.last_examination_entry().unwrap().content(), "Q2");
    }

    #[test]
    fn script_cursor_exhausts_then_returns_none() {
        let mut session = scripted_session();
        assert!(session.take_next_scripted_pair().is_some());
        assert!(session.take_next_scripted_pair().is_none());
        assert!(session.take_next_scripted_pair().is_none());
    }

    #[test]
    fn non_scripted_session_has_no_script_pairs() {
        let scenario_session = BattleSession::new(
            SessionOwner::Anonymous,
            RulesetType::Fre,
            ModePayload::CaseBased {
                case: crate::domain::battle::CaseData {
                    id: uuid::Uuid::new_v4(),
                    case_type: crate::domain::battle::CaseType::Criminal,
                    parties: Default::default(),
                    claims: "burglary".into(),
                    key_facts: "nighttime entry".into(),
                    examination_type: ExaminationType::Cross,
                    created_at: Timestamp::now(),
                },
            },
        );
        let mut s = scenario_session;
        assert!(s.take_next_scripted_pair().is_none());
    }

    #[test]
    fn objection_state_rejects_skipping_forward() {
        let mut session = scripted_session();
        assert!(session.set_objection_state(ObjectionState::Ruled).is_err());
        assert_eq!(session.current_state(), ObjectionState::None);
    }

    #[test]
    fn objection_state_allows_reasserting_current() {
        let mut session = scripted_session();
        assert!(session.set_objection_state(ObjectionState::None).is_ok());
    }

    #[test]
    fn end_stamps_time_and_blocks_mutation() {
        let mut session = scripted_session();
        session.end().unwrap();

        assert!(!session.is_active());
        assert_eq!(session.completion_status(), CompletionStatus::Completed);
        assert!(session.end_time().is_some());
        assert!(session
            .append_entry(CourtRole::Judge, "x", EntryKind::Statement)
            .is_err());
        assert!(session.end().is_err());
    }

    #[test]
    fn recent_transcript_returns_tail_in_order() {
        let mut session = scripted_session();
        for i in 0..7 {
            session
                .append_entry(
                    CourtRole::ExaminingCounsel,
                    format!("Q{}", i),
                    EntryKind::Question,
                )
                .unwrap();
        }
        let recent = session.recent_transcript(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent.first().unwrap().content(), "Q2");
        assert_eq!(recent.last().unwrap().content(), "Q6");
    }

    #[test]
    fn payload_context_depends_on_mode() {
        let session = scripted_session();
        assert!(session.payload().case_context().is_none());
        assert!(session.payload().examination_type().is_none());
    }
}

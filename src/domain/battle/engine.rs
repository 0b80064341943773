//! Battle engine - the objection-flow state machine and AI orchestration.
//!
//! The engine is the sole owner of session mutation. All operations run on a
//! `&mut self` receiver, so at most one can be in progress at a time; the
//! in-flight flag additionally gates the AI-dependent operations so a second
//! invocation while a generation request is outstanding is a no-op rather
//! than queued.
//!
//! Guard violations (objecting with no transcript, advancing while in
//! flight, acting with no session) are absorbed as no-ops. Generation
//! failures are caught here and logged; whatever had already been appended
//! stays, and nothing partial is ever rolled back.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::foundation::{CourtRole, DomainError, SessionOwner};
use crate::domain::ruleset::RulesetType;
use crate::ports::{AiError, CourtroomAi, ExaminationContext};

use super::case::ExaminationType;
use super::objection::{CounterArgument, JudgeRuling, Objection, ObjectionBattle, Rebuttal};
use super::session::{BattleSession, ModePayload, SessionMode};
use super::state::ObjectionState;
use super::transcript::EntryKind;

/// How many trailing transcript entries ground each generation request.
const RECENT_TRANSCRIPT_WINDOW: usize = 5;

/// Errors internal to one orchestration attempt. Absorbed (and logged) at
/// the operation boundary, never surfaced to callers.
#[derive(Debug, thiserror::Error)]
enum OrchestrationError {
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The objection battle state machine.
///
/// Owns at most one [`BattleSession`] at a time plus the working slots of
/// the current objection cycle. The presentation layer reads the session via
/// [`session()`](Self::session) and drives the six operations.
pub struct BattleEngine {
    generator: Arc<dyn CourtroomAi>,
    session: Option<BattleSession>,
    current_objection: Option<Objection>,
    current_counter: Option<CounterArgument>,
    current_rebuttal: Option<Rebuttal>,
    current_ruling: Option<JudgeRuling>,
    /// True while a generation request is outstanding.
    processing: bool,
}

impl BattleEngine {
    /// Creates an engine with no active session.
    pub fn new(generator: Arc<dyn CourtroomAi>) -> Self {
        Self {
            generator,
            session: None,
            current_objection: None,
            current_counter: None,
            current_rebuttal: None,
            current_ruling: None,
            processing: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access for the presentation layer
    // ─────────────────────────────────────────────────────────────────────

    /// The active session, if one has been started.
    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    /// The objection currently being litigated.
    pub fn current_objection(&self) -> Option<&Objection> {
        self.current_objection.as_ref()
    }

    /// The counter-argument of the current cycle, once generated.
    pub fn current_counter(&self) -> Option<&CounterArgument> {
        self.current_counter.as_ref()
    }

    /// The ruling of the current cycle, once delivered.
    pub fn current_ruling(&self) -> Option<&JudgeRuling> {
        self.current_ruling.as_ref()
    }

    /// True while a generation request is outstanding.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    // ─────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Initializes a fresh session, replacing any previous one.
    ///
    /// The tagged payload carries exactly the data its mode requires, so no
    /// further validation happens here.
    pub fn start_battle(&mut self, owner: SessionOwner, ruleset: RulesetType, payload: ModePayload) {
        self.session = Some(BattleSession::new(owner, ruleset, payload));
        self.current_objection = None;
        self.current_counter = None;
        self.current_rebuttal = None;
        self.current_ruling = None;
        self.processing = false;
    }

    /// Advances the testimony by exactly one question-answer pair.
    ///
    /// Scripted sessions replay the next script pair; past the end of the
    /// script nothing is appended and no error is raised. Dynamic sessions
    /// generate the question, append it, then generate the answer grounded
    /// on that question. Either way the QUESTION entry lands immediately
    /// before its paired ANSWER entry, and the state returns to `None`.
    ///
    /// No-op if there is no active session or a generation request is
    /// already in flight.
    pub async fn continue_examination(&mut self) {
        if !self.ready_for_generation() {
            return;
        }
        let session = self.session.as_ref().expect("checked by ready_for_generation");
        if session.current_state() != ObjectionState::None {
            debug!(state = ?session.current_state(), "examination paused: objection pending");
            return;
        }

        self.processing = true;
        let result = self.advance_examination().await;
        self.processing = false;

        if let Err(err) = result {
            warn!(error = %err, "examination advance failed; transcript unchanged");
        }
    }

    /// Raises an objection against the most recent question or answer.
    ///
    /// Scans the transcript in reverse for the target; appends an OBJECTION
    /// entry and moves the flow to `ObjectionMade`. No-op if there is no
    /// session, the transcript is empty, no target exists, another
    /// objection is already active, or a generation request is in flight.
    pub fn make_objection(&mut self, objection_name: &str, grounds: &str) {
        if self.processing {
            debug!("objection ignored: generation in flight");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_active() || session.transcript().is_empty() {
            return;
        }
        if session.current_state() != ObjectionState::None {
            debug!(state = ?session.current_state(), "objection ignored: one already active");
            return;
        }
        let Some(target) = session.last_examination_entry() else {
            return;
        };

        let objection = Objection::new(objection_name, grounds, target.id());
        let announcement = objection.announcement();

        if let Err(err) =
            session.append_entry(CourtRole::OpposingCounsel, announcement, EntryKind::Objection)
        {
            warn!(error = %err, "failed to record objection");
            return;
        }
        // Entry appended; the transition below cannot fail from None.
        let _ = session.set_objection_state(ObjectionState::ObjectionMade);
        self.current_objection = Some(objection);
    }

    /// Runs the objection battle: counter-argument, then ruling, then the
    /// permanent battle record, moving the flow to `Ruled`.
    ///
    /// The two generations are an explicit sequence: the ruling request is
    /// not issued until the counter-argument has been appended. A failure
    /// before the counter-argument lands leaves the operation re-invocable;
    /// a failure at the ruling step leaves the flow in `Arguing` with the
    /// argument recorded and no battle record.
    ///
    /// No-op if there is no active objection, a counter-argument already
    /// exists, or a generation request is in flight.
    pub async fn process_objection(&mut self) {
        if !self.ready_for_generation() {
            return;
        }
        if self.current_objection.is_none() || self.current_counter.is_some() {
            return;
        }

        self.processing = true;
        let result = self.run_objection_battle().await;
        self.processing = false;

        if let Err(err) = result {
            warn!(error = %err, "objection battle failed mid-sequence");
        }
    }

    /// Acknowledges the ruling: clears the working slots and returns the
    /// flow to `None`. Pure local state transition, no I/O.
    ///
    /// No-op unless the flow is in `Ruled`.
    pub fn continue_after_ruling(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.current_state() != ObjectionState::Ruled {
            debug!(state = ?session.current_state(), "continue ignored: no ruling pending");
            return;
        }

        let _ = session.set_objection_state(ObjectionState::None);
        self.current_objection = None;
        self.current_counter = None;
        self.current_rebuttal = None;
        self.current_ruling = None;
    }

    /// Ends the session. Terminal; subsequent operations on this session
    /// are no-ops.
    pub fn end_battle(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(err) = session.end() {
            debug!(error = %err, "end ignored: session already ended");
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Orchestration internals
    // ─────────────────────────────────────────────────────────────────────

    fn ready_for_generation(&self) -> bool {
        if self.processing {
            debug!("operation ignored: generation in flight");
            return false;
        }
        match self.session.as_ref() {
            Some(session) => session.is_active(),
            None => false,
        }
    }

    /// Builds the conversational grounding for a generation request.
    fn examination_context(session: &BattleSession) -> ExaminationContext {
        ExaminationContext {
            session_id: session.id(),
            owner: session.owner().clone(),
            case_context: session
                .payload()
                .case_context()
                .unwrap_or_else(|| "Scripted examination practice.".to_string()),
            witness_context: session
                .payload()
                .witness_context()
                .unwrap_or_else(|| "Witness".to_string()),
            examination_type: session
                .payload()
                .examination_type()
                .unwrap_or(ExaminationType::Direct),
            ruleset: session.ruleset(),
            recent_transcript: session.recent_transcript(RECENT_TRANSCRIPT_WINDOW),
        }
    }

    async fn advance_examination(&mut self) -> Result<(), OrchestrationError> {
        let session = self.session.as_mut().expect("guarded by ready_for_generation");

        match session.mode() {
            SessionMode::Scripted => {
                // Script exhaustion is not an error; nothing is appended.
                if let Some(pair) = session.take_next_scripted_pair() {
                    session.append_entry(
                        CourtRole::ExaminingCounsel,
                        pair.question,
                        EntryKind::Question,
                    )?;
                    session.append_entry(CourtRole::Witness, pair.answer, EntryKind::Answer)?;
                }
            }
            SessionMode::CaseBased | SessionMode::AiGenerated => {
                let ctx = Self::examination_context(session);
                let question = self.generator.next_question(&ctx).await?;

                let session = self.session.as_mut().expect("session unchanged across await");
                session.append_entry(
                    CourtRole::ExaminingCounsel,
                    question.clone(),
                    EntryKind::Question,
                )?;

                // Re-ground the answer on the transcript that now includes
                // the question.
                let ctx = Self::examination_context(session);
                let answer = self.generator.witness_answer(&question, &ctx).await?;

                let session = self.session.as_mut().expect("session unchanged across await");
                session.append_entry(CourtRole::Witness, answer, EntryKind::Answer)?;
            }
        }

        Ok(())
    }

    async fn run_objection_battle(&mut self) -> Result<(), OrchestrationError> {
        let session = self.session.as_mut().expect("guarded by ready_for_generation");
        let objection = self
            .current_objection
            .clone()
            .expect("guarded by process_objection");

        let Some(target) = session.entry(objection.target_entry_id).cloned() else {
            warn!(target = %objection.target_entry_id, "objection target missing from transcript");
            return Ok(());
        };

        session.set_objection_state(ObjectionState::Arguing)?;
        let trace_id = Uuid::new_v4();
        debug!(%trace_id, objection = %objection.objection_name, "objection battle started");

        let ctx = Self::examination_context(session);
        let counter = self.generator.counter_argument(&objection, &target, &ctx).await?;

        let session = self.session.as_mut().expect("session unchanged across await");
        session.append_entry(
            CourtRole::ExaminingCounsel,
            counter.content.clone(),
            EntryKind::Argument,
        )?;
        self.current_counter = Some(counter.clone());

        // Ruling depends on the counter-argument text, so it is requested
        // only after the ARGUMENT entry landed.
        let ctx = Self::examination_context(self.session.as_ref().expect("session present"));
        let ruling = self
            .generator
            .judge_ruling(&objection, &counter, &target, &ctx)
            .await?;

        let session = self.session.as_mut().expect("session unchanged across await");
        session.append_entry(CourtRole::Judge, ruling.announcement(), EntryKind::Ruling)?;

        let battle = ObjectionBattle::new(
            objection,
            counter,
            self.current_rebuttal.take(),
            ruling.clone(),
        );
        session.append_battle(battle)?;
        session.set_objection_state(ObjectionState::Ruled)?;
        self.current_ruling = Some(ruling);

        debug!(%trace_id, "objection battle resolved");
        Ok(())
    }
}

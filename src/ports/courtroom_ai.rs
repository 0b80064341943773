//! Courtroom AI Port - the content generator contract the engine drives.
//!
//! The battle engine does not implement model inference; it depends on this
//! port for the five kinds of courtroom content. Each call is one
//! request/response pair and a failure is fatal to that one step only.

use async_trait::async_trait;

use crate::domain::battle::{
    CounterArgument, ExaminationType, GeneratedScenario, JudgeRuling, Objection,
    ScenarioPreference, TranscriptEntry,
};
use crate::domain::foundation::{SessionId, SessionOwner};
use crate::domain::ruleset::RulesetType;

use super::AiError;

/// Conversational grounding passed with every generation request.
#[derive(Debug, Clone)]
pub struct ExaminationContext {
    /// Session the content is generated for.
    pub session_id: SessionId,
    /// Who is running the practice session.
    pub owner: SessionOwner,
    /// One-paragraph case summary, or a neutral placeholder for scripted
    /// sessions.
    pub case_context: String,
    /// One-line witness identity and background.
    pub witness_context: String,
    /// Direct or cross; drives question style.
    pub examination_type: ExaminationType,
    /// Ruleset in force for the session.
    pub ruleset: RulesetType,
    /// The last several transcript entries, oldest first.
    pub recent_transcript: Vec<TranscriptEntry>,
}

/// Port for generating courtroom content.
///
/// Implementations shape prompts, call the underlying model, and parse the
/// responses into domain artifacts.
#[async_trait]
pub trait CourtroomAi: Send + Sync {
    /// Generates the examining counsel's next question.
    async fn next_question(&self, ctx: &ExaminationContext) -> Result<String, AiError>;

    /// Generates the witness's answer to the given question.
    async fn witness_answer(
        &self,
        question: &str,
        ctx: &ExaminationContext,
    ) -> Result<String, AiError>;

    /// Generates examining counsel's counter-argument against an objection.
    async fn counter_argument(
        &self,
        objection: &Objection,
        target: &TranscriptEntry,
        ctx: &ExaminationContext,
    ) -> Result<CounterArgument, AiError>;

    /// Generates the judge's ruling on an objection.
    ///
    /// Implementations must always produce a displayable ruling: when the
    /// decision cannot be parsed from the model response, the decision
    /// defaults to `OVERRULED` and the justification falls back to the raw
    /// response text.
    async fn judge_ruling(
        &self,
        objection: &Objection,
        counter: &CounterArgument,
        target: &TranscriptEntry,
        ctx: &ExaminationContext,
    ) -> Result<JudgeRuling, AiError>;

    /// Generates a complete practice scenario.
    async fn full_scenario(
        &self,
        ruleset: RulesetType,
        preference: ScenarioPreference,
    ) -> Result<GeneratedScenario, AiError>;
}

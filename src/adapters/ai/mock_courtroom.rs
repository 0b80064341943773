//! Mock courtroom content generator for testing.
//!
//! A configurable implementation of the [`CourtroomAi`] port that returns
//! canned content without prompt construction or network calls. Used by the
//! battle engine tests and the end-to-end flow tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::battle::{
    CaseData, CaseParties, CaseType, CounterArgument, ExaminationType, GeneratedScenario,
    JudgeRuling, ModePayload, Objection, RulingDecision, ScenarioPreference, TranscriptEntry,
    WitnessData,
};
use crate::domain::foundation::Timestamp;
use crate::domain::ruleset::RulesetType;
use crate::ports::{AiError, CourtroomAi, ExaminationContext};

/// Mock courtroom generator with canned content and error injection.
///
/// Every method records its name in the call log, returns its configured
/// content, or a sensible default when none was configured, and fails with a
/// provider-unavailable error when its failure flag is set.
#[derive(Debug, Clone)]
pub struct MockCourtroomAi {
    question: String,
    answer: String,
    counter_argument: String,
    ruling_decision: RulingDecision,
    ruling_justification: String,
    fail_next_question: bool,
    fail_witness_answer: bool,
    fail_counter_argument: bool,
    fail_judge_ruling: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockCourtroomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCourtroomAi {
    /// Creates a mock with default canned content.
    pub fn new() -> Self {
        Self {
            question: "Can you describe what you saw that evening?".to_string(),
            answer: "I saw the defendant leave through the back door.".to_string(),
            counter_argument: "Your Honor, the testimony is admissible under Rule 803."
                .to_string(),
            ruling_decision: RulingDecision::Overruled,
            ruling_justification: "The testimony falls within a recognized exception."
                .to_string(),
            fail_next_question: false,
            fail_witness_answer: false,
            fail_counter_argument: false,
            fail_judge_ruling: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the question returned by `next_question`.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Sets the answer returned by `witness_answer`.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    /// Sets the counter-argument text.
    pub fn with_counter_argument(mut self, content: impl Into<String>) -> Self {
        self.counter_argument = content.into();
        self
    }

    /// Sets the ruling returned by `judge_ruling`.
    pub fn with_ruling(
        mut self,
        decision: RulingDecision,
        justification: impl Into<String>,
    ) -> Self {
        self.ruling_decision = decision;
        self.ruling_justification = justification.into();
        self
    }

    /// Makes `next_question` fail.
    pub fn failing_next_question(mut self) -> Self {
        self.fail_next_question = true;
        self
    }

    /// Makes `witness_answer` fail.
    pub fn failing_witness_answer(mut self) -> Self {
        self.fail_witness_answer = true;
        self
    }

    /// Makes `counter_argument` fail.
    pub fn failing_counter_argument(mut self) -> Self {
        self.fail_counter_argument = true;
        self
    }

    /// Makes `judge_ruling` fail.
    pub fn failing_judge_ruling(mut self) -> Self {
        self.fail_judge_ruling = true;
        self
    }

    /// Shared handle to the ordered list of method names called.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }

    /// A ready-made AI-generated session payload for tests that need a
    /// dynamic mode without running scenario generation.
    pub fn sample_scenario_payload() -> ModePayload {
        ModePayload::AiGenerated {
            scenario: Self::sample_scenario(),
        }
    }

    fn sample_scenario() -> GeneratedScenario {
        GeneratedScenario {
            id: uuid::Uuid::new_v4(),
            case_data: CaseData {
                id: uuid::Uuid::new_v4(),
                case_type: CaseType::Criminal,
                parties: CaseParties {
                    plaintiff: None,
                    defendant: Some("Marcus Webb".to_string()),
                    prosecution: Some("State of Ohio".to_string()),
                },
                claims: "armed robbery of a convenience store".to_string(),
                key_facts: "Store robbed at 11pm; clerk identified the defendant.".to_string(),
                examination_type: ExaminationType::Direct,
                created_at: Timestamp::now(),
            },
            witness: WitnessData {
                name: "Dana Ellis".to_string(),
                role: "Store clerk".to_string(),
                background: "Worked the night shift for three years.".to_string(),
            },
            summary: "A clerk identifies the defendant in a robbery trial.".to_string(),
            created_at: Timestamp::now(),
        }
    }

    fn record(&self, method: &str) {
        self.calls.lock().unwrap().push(method.to_string());
    }

    fn fail(method: &str) -> AiError {
        AiError::unavailable(format!("mock failure injected in {}", method))
    }
}

#[async_trait]
impl CourtroomAi for MockCourtroomAi {
    async fn next_question(&self, _ctx: &ExaminationContext) -> Result<String, AiError> {
        self.record("next_question");
        if self.fail_next_question {
            return Err(Self::fail("next_question"));
        }
        Ok(self.question.clone())
    }

    async fn witness_answer(
        &self,
        _question: &str,
        _ctx: &ExaminationContext,
    ) -> Result<String, AiError> {
        self.record("witness_answer");
        if self.fail_witness_answer {
            return Err(Self::fail("witness_answer"));
        }
        Ok(self.answer.clone())
    }

    async fn counter_argument(
        &self,
        _objection: &Objection,
        _target: &TranscriptEntry,
        _ctx: &ExaminationContext,
    ) -> Result<CounterArgument, AiError> {
        self.record("counter_argument");
        if self.fail_counter_argument {
            return Err(Self::fail("counter_argument"));
        }
        Ok(CounterArgument::new(self.counter_argument.clone(), vec![]))
    }

    async fn judge_ruling(
        &self,
        _objection: &Objection,
        _counter: &CounterArgument,
        _target: &TranscriptEntry,
        _ctx: &ExaminationContext,
    ) -> Result<JudgeRuling, AiError> {
        self.record("judge_ruling");
        if self.fail_judge_ruling {
            return Err(Self::fail("judge_ruling"));
        }
        Ok(JudgeRuling::new(
            self.ruling_decision,
            self.ruling_justification.clone(),
            vec![],
        ))
    }

    async fn full_scenario(
        &self,
        _ruleset: RulesetType,
        _preference: ScenarioPreference,
    ) -> Result<GeneratedScenario, AiError> {
        self.record("full_scenario");
        Ok(Self::sample_scenario())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, SessionOwner};

    fn context() -> ExaminationContext {
        ExaminationContext {
            session_id: SessionId::new(),
            owner: SessionOwner::Anonymous,
            case_context: "Test case.".to_string(),
            witness_context: "Test witness.".to_string(),
            examination_type: ExaminationType::Direct,
            ruleset: RulesetType::Fre,
            recent_transcript: vec![],
        }
    }

    #[tokio::test]
    async fn returns_configured_content() {
        let mock = MockCourtroomAi::new()
            .with_question("Where were you at 11pm?")
            .with_ruling(RulingDecision::Sustained, "Rule 802 controls.");

        assert_eq!(
            mock.next_question(&context()).await.unwrap(),
            "Where were you at 11pm?"
        );

        let objection = Objection::new("Hearsay", "FRE 802", crate::domain::foundation::EntryId::new());
        let counter = CounterArgument::new("It is an excited utterance.", vec![]);
        let entry = TranscriptEntry::new(
            crate::domain::foundation::CourtRole::Witness,
            "He told me so.",
            crate::domain::battle::EntryKind::Answer,
            Timestamp::now(),
        );
        let ruling = mock
            .judge_ruling(&objection, &counter, &entry, &context())
            .await
            .unwrap();
        assert_eq!(ruling.decision, RulingDecision::Sustained);
    }

    #[tokio::test]
    async fn failure_flags_inject_errors() {
        let mock = MockCourtroomAi::new().failing_next_question();
        assert!(mock.next_question(&context()).await.is_err());
    }

    #[tokio::test]
    async fn call_log_records_method_order() {
        let mock = MockCourtroomAi::new();
        let log = mock.call_log();

        mock.next_question(&context()).await.unwrap();
        mock.witness_answer("q", &context()).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["next_question".to_string(), "witness_answer".to_string()]
        );
    }
}

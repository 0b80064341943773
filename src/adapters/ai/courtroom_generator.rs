//! Courtroom content generator - implements [`CourtroomAi`] over a raw
//! [`AiProvider`].
//!
//! Owns the prompt engineering for all five content kinds: persona framing,
//! catalog rule text embedded in the system prompt, transcript grounding,
//! and the parsing of model output back into domain artifacts. Parsing is
//! deliberately forgiving; a ruling that cannot be parsed still yields a
//! displayable ruling rather than an error.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::battle::{
    CaseData, CaseParties, CaseType, CounterArgument, EntryKind, ExaminationType,
    GeneratedScenario, JudgeRuling, Objection, RulingDecision, ScenarioPreference,
    TranscriptEntry, WitnessData,
};
use crate::domain::foundation::Timestamp;
use crate::domain::ruleset::{ruleset, RulesetType};
use crate::ports::{
    AiError, AiProvider, CompletionRequest, CourtroomAi, ExaminationContext, MessageRole,
    RequestMetadata,
};

/// Rule citation pattern: "FRE 802", "Rule 611(c)", "§403", or a bare
/// three-digit number. One- and two-digit numbers (Mock Trial rules) only
/// count when prefixed, so ordinary small numbers in prose stay unmatched.
static RULE_CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:FRE |Rule |§)\d{1,3}(?:\([a-z]\))?|\d{3}(?:\([a-z]\))?")
        .expect("valid citation regex")
});

/// Ruling decision line: "DECISION: SUSTAINED" or "DECISION: OVERRULED".
static DECISION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)DECISION:\s*(SUSTAINED|OVERRULED)").expect("valid decision regex"));

/// Justification line, capturing everything after the marker.
static JUSTIFICATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)JUSTIFICATION:\s*(.+)$").expect("valid justification regex")
});

/// Generates courtroom content through an LLM provider.
pub struct CourtroomGenerator {
    provider: Arc<dyn AiProvider>,
}

impl CourtroomGenerator {
    /// Creates a generator over the given provider.
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    /// Persona and rule framing shared by every request of a session.
    fn system_prompt(ruleset_type: RulesetType) -> String {
        let catalog = ruleset(ruleset_type);
        let rule_text: String = catalog
            .rules
            .iter()
            .map(|r| format!("Rule {}: {}\n{}", r.number, r.title, r.text))
            .collect::<Vec<_>>()
            .join("\n\n");

        match ruleset_type {
            RulesetType::Fre => format!(
                "You are a sophisticated AI legal assistant specializing in the Federal Rules \
                 of Evidence. You have deep expertise in all Federal Rules of Evidence (FRE), \
                 courtroom procedure, evidentiary arguments, and professional legal reasoning.\n\n\
                 Available Rules:\n{rule_text}\n\n\
                 When acting as Examining Counsel, you strategically test the boundaries of \
                 evidence rules while maintaining professional conduct.\n\n\
                 When acting as Opposing Counsel (counter-arguing), you provide sophisticated, \
                 case-specific arguments that cite specific rule numbers and language, address \
                 the factual context of the case, and use professional courtroom language.\n\n\
                 When acting as the Judge, you weigh both arguments carefully, apply the rules \
                 correctly to the specific facts, reference specific rule numbers, and explain \
                 your reasoning in a way that helps users learn."
            ),
            RulesetType::MockTrial => format!(
                "You are an AI legal assistant specializing in simplified Mock Trial evidence \
                 rules, basic courtroom procedure, and clear, accessible legal reasoning.\n\n\
                 Available Rules:\n{rule_text}\n\n\
                 When acting as Examining Counsel, you ask questions that test basic evidence \
                 rules while keeping complexity manageable.\n\n\
                 When acting as Opposing Counsel (counter-arguing), you provide clear, \
                 straightforward arguments that reference the simplified rule numbers, explain \
                 why the evidence should be admitted, and use accessible language appropriate \
                 for students and competitors.\n\n\
                 When acting as the Judge, you weigh both arguments, apply the simplified \
                 rules correctly, and provide clear, educational explanations."
            ),
        }
    }

    fn metadata_for(ctx: &ExaminationContext) -> RequestMetadata {
        RequestMetadata::new(
            ctx.owner.clone(),
            ctx.session_id,
            Uuid::new_v4().to_string(),
        )
    }

    /// Renders recent testimony as a prompt section, or empty when the
    /// transcript is still blank.
    fn testimony_section(heading: &str, entries: &[TranscriptEntry]) -> String {
        if entries.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = entries.iter().map(|e| e.as_dialogue_line()).collect();
        format!("\n{}:\n{}\n", heading, lines.join("\n"))
    }

    async fn complete_text(&self, request: CompletionRequest) -> Result<String, AiError> {
        let response = self.provider.complete(request).await?;
        debug!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "completion received"
        );
        Ok(response.content.trim().to_string())
    }

    /// Pulls every rule citation out of free text, in order of appearance.
    fn extract_citations(text: &str) -> Vec<String> {
        RULE_CITATION
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl CourtroomAi for CourtroomGenerator {
    async fn next_question(&self, ctx: &ExaminationContext) -> Result<String, AiError> {
        let style_goals = match ctx.examination_type {
            ExaminationType::Direct => {
                "- Is non-leading (unless appropriate for a hostile witness)\n\
                 - Elicits narrative testimony\n\
                 - May occasionally push boundaries (slightly leading, borderline improper)"
            }
            ExaminationType::Cross => {
                "- Is appropriately leading\n\
                 - Challenges the witness\n\
                 - Tests their testimony"
            }
        };

        let prompt = format!(
            "You are acting as the Examining Counsel in a {exam_type}.\n\n\
             Case Context:\n{case}\n\n\
             Witness:\n{witness}\n\
             {testimony}\n\
             Generate ONE {exam_type} question that:\n\
             {style_goals}\n\
             - Is strategic and tests evidence rules\n\
             - Fits naturally in the examination flow\n\
             - Could potentially trigger an objection\n\n\
             Return ONLY the question itself, nothing else. Do not include \"Q:\" or any prefix.",
            exam_type = ctx.examination_type.describe(),
            case = ctx.case_context,
            witness = ctx.witness_context,
            testimony = Self::testimony_section("Previous Testimony", &ctx.recent_transcript),
        );

        let request = CompletionRequest::new()
            .with_system_prompt(Self::system_prompt(ctx.ruleset))
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(200)
            .with_metadata(Self::metadata_for(ctx));

        self.complete_text(request).await
    }

    async fn witness_answer(
        &self,
        question: &str,
        ctx: &ExaminationContext,
    ) -> Result<String, AiError> {
        let prompt = format!(
            "You are acting as the Witness testifying in court.\n\n\
             Case Context:\n{case}\n\n\
             Your Background:\n{witness}\n\
             {testimony}\n\
             Question asked: \"{question}\"\n\n\
             Provide a natural witness response that:\n\
             - Stays in character based on the witness background\n\
             - Answers the question (but not too perfectly)\n\
             - May occasionally include objectionable content (hearsay, speculation, lack of \
             personal knowledge)\n\
             - Sounds like realistic courtroom testimony\n\
             - Is 1-3 sentences\n\n\
             Return ONLY the answer itself, nothing else. Do not include \"A:\" or any prefix.",
            case = ctx.case_context,
            witness = ctx.witness_context,
            testimony = Self::testimony_section("Previous Testimony", &ctx.recent_transcript),
        );

        let request = CompletionRequest::new()
            .with_system_prompt(Self::system_prompt(ctx.ruleset))
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(300)
            .with_metadata(Self::metadata_for(ctx));

        self.complete_text(request).await
    }

    async fn counter_argument(
        &self,
        objection: &Objection,
        target: &TranscriptEntry,
        ctx: &ExaminationContext,
    ) -> Result<CounterArgument, AiError> {
        let catalog = ruleset(ctx.ruleset);
        let target_kind = if target.kind() == EntryKind::Question {
            "question"
        } else {
            "answer"
        };
        let rule_text_line = objection
            .rule_text
            .as_ref()
            .map(|t| format!("- Rule Text: {}\n", t))
            .unwrap_or_default();

        let prompt = format!(
            "You are now acting as the Examining Counsel (Opposing Counsel to the objector) \
             responding to an objection.\n\n\
             Case Context:\n{case}\n\
             {testimony}\n\
             The {target_kind} at issue:\n\"{target_content}\"\n\n\
             Objection Made:\n\
             - Objection Name: {name}\n\
             - Grounds: {grounds}\n\
             {rule_text_line}\n\
             You must now argue AGAINST this objection and defend your {target_kind}.\n\n\
             Provide a sophisticated, professional counter-argument that:\n\
             1. Directly addresses the objection raised\n\
             2. Cites specific rule numbers and legal standards from the {ruleset_name}\n\
             3. Explains why the {target_kind} IS admissible under the rules\n\
             4. Uses the specific factual context of this case\n\
             5. Uses professional courtroom language (\"Your Honor, ...\")\n\
             6. Is 2-4 sentences\n\n\
             Return your counter-argument:",
            case = ctx.case_context,
            testimony = Self::testimony_section("Recent Testimony", &ctx.recent_transcript),
            target_content = target.content(),
            name = objection.objection_name,
            grounds = objection.grounds,
            ruleset_name = catalog.name,
        );

        let request = CompletionRequest::new()
            .with_system_prompt(Self::system_prompt(ctx.ruleset))
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(400)
            .with_metadata(Self::metadata_for(ctx));

        let content = self.complete_text(request).await?;
        let cited_rules = Self::extract_citations(&content);
        Ok(CounterArgument::new(content, cited_rules))
    }

    async fn judge_ruling(
        &self,
        objection: &Objection,
        counter: &CounterArgument,
        target: &TranscriptEntry,
        ctx: &ExaminationContext,
    ) -> Result<JudgeRuling, AiError> {
        let catalog = ruleset(ctx.ruleset);
        let target_kind = if target.kind() == EntryKind::Question {
            "Question"
        } else {
            "Answer"
        };

        let prompt = format!(
            "You are now acting as the Judge presiding over this case.\n\n\
             Case Context:\n{case}\n\n\
             The {target_kind} at issue:\n\"{target_content}\"\n\n\
             Objection:\n\
             - {name}\n\
             - Grounds: {grounds}\n\n\
             Opposing Counsel's Counter-Argument:\n\"{counter}\"\n\n\
             You must now rule on this objection.\n\n\
             Analyze both arguments and make a ruling (SUSTAINED or OVERRULED) based on:\n\
             1. The applicable rules from the {ruleset_name}\n\
             2. The specific facts of this case\n\
             3. The strength of both arguments\n\
             4. Proper application of evidentiary standards\n\n\
             Provide your ruling in this EXACT format:\n\n\
             DECISION: [SUSTAINED or OVERRULED]\n\n\
             JUSTIFICATION: [Your explanation]\n\n\
             Your justification should be 2-4 sentences, reference specific rule numbers, and \
             explain WHY you made this decision. This is a teaching moment - make your \
             reasoning clear and instructive.",
            case = ctx.case_context,
            target_content = target.content(),
            name = objection.objection_name,
            grounds = objection.grounds,
            counter = counter.content,
            ruleset_name = catalog.name,
        );

        let request = CompletionRequest::new()
            .with_system_prompt(Self::system_prompt(ctx.ruleset))
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(500)
            .with_metadata(Self::metadata_for(ctx));

        let response = self.complete_text(request).await?;
        Ok(parse_ruling(&response))
    }

    async fn full_scenario(
        &self,
        ruleset_type: RulesetType,
        preference: ScenarioPreference,
    ) -> Result<GeneratedScenario, AiError> {
        let case_type_instruction = match preference {
            ScenarioPreference::Random => {
                "Randomly choose between a civil or criminal case.".to_string()
            }
            ScenarioPreference::Civil => "Generate a CIVIL case.".to_string(),
            ScenarioPreference::Criminal => "Generate a CRIMINAL case.".to_string(),
        };

        let prompt = format!(
            "Generate a complete courtroom scenario for evidence objection practice.\n\n\
             {case_type_instruction}\n\n\
             Provide a realistic scenario with:\n\
             1. Case type (civil or criminal)\n\
             2. Parties involved\n\
             3. Claims/charges\n\
             4. Key facts (3-5 bullet points)\n\
             5. Witness name and role\n\
             6. Witness background (1-2 sentences)\n\
             7. Brief scenario summary\n\n\
             Return your response in this EXACT JSON format:\n\
             {{\n\
               \"caseType\": \"CIVIL\" or \"CRIMINAL\",\n\
               \"parties\": {{\n\
                 \"plaintiff\": \"name\" (if civil),\n\
                 \"defendant\": \"name\",\n\
                 \"prosecution\": \"name\" (if criminal)\n\
               }},\n\
               \"claims\": \"brief description of claims/charges\",\n\
               \"keyFacts\": \"bullet point facts\",\n\
               \"witness\": {{\n\
                 \"name\": \"witness name\",\n\
                 \"role\": \"witness role\",\n\
                 \"background\": \"witness background\"\n\
               }},\n\
               \"scenarioSummary\": \"1-2 sentence summary\"\n\
             }}"
        );

        let request = CompletionRequest::new()
            .with_system_prompt(Self::system_prompt(ruleset_type))
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(800);

        let response = self.complete_text(request).await?;
        Ok(parse_scenario(&response))
    }
}

/// Parses a judge response into a ruling.
///
/// When the DECISION marker is absent the decision defaults to OVERRULED and
/// the entire response text becomes the justification, so a malformed model
/// response still produces a displayable ruling.
fn parse_ruling(response: &str) -> JudgeRuling {
    let decision = DECISION_LINE
        .captures(response)
        .map(|c| {
            if c[1].eq_ignore_ascii_case("SUSTAINED") {
                RulingDecision::Sustained
            } else {
                RulingDecision::Overruled
            }
        })
        .unwrap_or_else(|| {
            warn!("ruling response missing DECISION marker; defaulting to OVERRULED");
            RulingDecision::Overruled
        });

    let justification = JUSTIFICATION_LINE
        .captures(response)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| response.trim().to_string());

    let rules_applied = CourtroomGenerator::extract_citations(&justification);
    JudgeRuling::new(decision, justification, rules_applied)
}

/// Parses a scenario response, tolerating prose around the JSON body and
/// filling defaults for any missing field.
fn parse_scenario(response: &str) -> GeneratedScenario {
    let json_body = response
        .find('{')
        .and_then(|start| response.rfind('}').map(|end| &response[start..=end]))
        .unwrap_or("{}");

    let raw: RawScenario = serde_json::from_str(json_body).unwrap_or_else(|e| {
        warn!(error = %e, "scenario response not valid JSON; using defaults");
        RawScenario::default()
    });

    let case_type = match raw.case_type.as_deref() {
        Some(s) if s.eq_ignore_ascii_case("CRIMINAL") => CaseType::Criminal,
        _ => CaseType::Civil,
    };

    let case_data = CaseData {
        id: Uuid::new_v4(),
        case_type,
        parties: CaseParties {
            plaintiff: raw.parties.plaintiff,
            defendant: raw.parties.defendant,
            prosecution: raw.parties.prosecution,
        },
        claims: raw.claims.unwrap_or_default(),
        key_facts: raw.key_facts.unwrap_or_default(),
        examination_type: ExaminationType::Direct,
        created_at: Timestamp::now(),
    };

    let witness = WitnessData {
        name: raw.witness.name.unwrap_or_else(|| "Unknown Witness".to_string()),
        role: raw.witness.role.unwrap_or_else(|| "Witness".to_string()),
        background: raw.witness.background.unwrap_or_default(),
    };

    GeneratedScenario {
        id: Uuid::new_v4(),
        case_data,
        witness,
        summary: raw.scenario_summary.unwrap_or_default(),
        created_at: Timestamp::now(),
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawScenario {
    case_type: Option<String>,
    parties: RawParties,
    claims: Option<String>,
    key_facts: Option<String>,
    witness: RawWitness,
    scenario_summary: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawParties {
    plaintiff: Option<String>,
    defendant: Option<String>,
    prosecution: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawWitness {
    name: Option<String>,
    role: Option<String>,
    background: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiProvider;
    use crate::domain::foundation::{CourtRole, SessionId, SessionOwner};

    fn context(ruleset_type: RulesetType) -> ExaminationContext {
        ExaminationContext {
            session_id: SessionId::new(),
            owner: SessionOwner::Anonymous,
            case_context: "Civil negligence claim over a warehouse fire.".to_string(),
            witness_context: "Jordan Blake, night security guard.".to_string(),
            examination_type: ExaminationType::Direct,
            ruleset: ruleset_type,
            recent_transcript: vec![TranscriptEntry::new(
                CourtRole::Witness,
                "I heard the alarm around midnight.",
                EntryKind::Answer,
                Timestamp::now(),
            )],
        }
    }

    fn hearsay_objection(target: &TranscriptEntry) -> Objection {
        Objection::new(
            "Hearsay",
            "Out-of-court statement offered for its truth",
            target.id(),
        )
    }

    #[test]
    fn extracts_prefixed_and_bare_citations() {
        let text = "Under FRE 802 and Rule 611(c), and see also 403, this stands.";
        let citations = CourtroomGenerator::extract_citations(text);
        assert_eq!(citations, vec!["FRE 802", "Rule 611(c)", "403"]);
    }

    #[test]
    fn extracts_short_mock_trial_citations_when_prefixed() {
        let citations =
            CourtroomGenerator::extract_citations("Under Rule 3 this is inadmissible hearsay.");
        assert_eq!(citations, vec!["Rule 3"]);

        // Unprefixed short numbers are ordinary prose, not citations.
        let none = CourtroomGenerator::extract_citations("The witness named 3 people over 2 days.");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn next_question_grounds_prompt_in_transcript() {
        let provider =
            Arc::new(MockAiProvider::new().with_response("  What did you see next?  "));
        let generator = CourtroomGenerator::new(provider.clone());

        let question = generator
            .next_question(&context(RulesetType::Fre))
            .await
            .unwrap();
        assert_eq!(question, "What did you see next?");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.max_tokens, Some(200));
        assert!(request.metadata.is_some());
        assert!(request
            .system_prompt
            .as_deref()
            .unwrap()
            .contains("Federal Rules"));

        let prompt = &request.messages[0].content;
        assert!(prompt.contains("I heard the alarm around midnight."));
        assert!(prompt.contains("direct examination"));
    }

    #[tokio::test]
    async fn witness_answer_quotes_the_question_asked() {
        let provider =
            Arc::new(MockAiProvider::new().with_response("I saw smoke near the loading dock."));
        let generator = CourtroomGenerator::new(provider.clone());

        let answer = generator
            .witness_answer("What did you see?", &context(RulesetType::Fre))
            .await
            .unwrap();
        assert_eq!(answer, "I saw smoke near the loading dock.");

        let request = &provider.calls()[0];
        assert_eq!(request.max_tokens, Some(300));
        assert!(request.messages[0]
            .content
            .contains("Question asked: \"What did you see?\""));
    }

    #[tokio::test]
    async fn counter_argument_cites_rules_from_response() {
        let provider = Arc::new(MockAiProvider::new().with_response(
            "Your Honor, the statement is a present sense impression under Rule 803(a) \
             and is admissible.",
        ));
        let generator = CourtroomGenerator::new(provider.clone());
        let ctx = context(RulesetType::Fre);
        let target = ctx.recent_transcript[0].clone();
        let objection = hearsay_objection(&target);

        let counter = generator
            .counter_argument(&objection, &target, &ctx)
            .await
            .unwrap();
        assert_eq!(counter.cited_rules, vec!["Rule 803(a)"]);

        let request = &provider.calls()[0];
        assert_eq!(request.max_tokens, Some(400));
        let prompt = &request.messages[0].content;
        assert!(prompt.contains("The answer at issue"));
        assert!(prompt.contains("Objection Name: Hearsay"));
        assert!(prompt.contains("Federal Rules of Evidence"));
    }

    #[tokio::test]
    async fn judge_ruling_sends_decision_format_and_parses_response() {
        let provider = Arc::new(MockAiProvider::new().with_response(
            "DECISION: SUSTAINED\n\nJUSTIFICATION: Hearsay under Rule 802; no exception applies.",
        ));
        let generator = CourtroomGenerator::new(provider.clone());
        let ctx = context(RulesetType::Fre);
        let target = ctx.recent_transcript[0].clone();
        let objection = hearsay_objection(&target);
        let counter = CounterArgument::new(
            "Your Honor, it falls under the excited utterance exception, Rule 803.",
            vec!["Rule 803".to_string()],
        );

        let ruling = generator
            .judge_ruling(&objection, &counter, &target, &ctx)
            .await
            .unwrap();
        assert_eq!(ruling.decision, RulingDecision::Sustained);
        assert_eq!(ruling.rules_applied, vec!["Rule 802"]);

        let request = &provider.calls()[0];
        assert_eq!(request.max_tokens, Some(500));
        let prompt = &request.messages[0].content;
        assert!(prompt.contains("DECISION: [SUSTAINED or OVERRULED]"));
        assert!(prompt.contains("excited utterance"));
        assert!(prompt.contains("Grounds: Out-of-court statement offered for its truth"));
    }

    #[tokio::test]
    async fn full_scenario_requests_json_and_parses_it() {
        let provider = Arc::new(MockAiProvider::new().with_response(
            r#"{
  "caseType": "CIVIL",
  "parties": {"plaintiff": "Rivera", "defendant": "Hartwell Logistics"},
  "claims": "negligence",
  "keyFacts": "- Fire broke out overnight",
  "witness": {"name": "Jordan Blake", "role": "Security guard", "background": "Five years on nights."},
  "scenarioSummary": "A negligence suit over a warehouse fire."
}"#,
        ));
        let generator = CourtroomGenerator::new(provider.clone());

        let scenario = generator
            .full_scenario(RulesetType::Fre, ScenarioPreference::Civil)
            .await
            .unwrap();
        assert_eq!(scenario.case_data.case_type, CaseType::Civil);
        assert_eq!(scenario.witness.name, "Jordan Blake");

        let request = &provider.calls()[0];
        assert_eq!(request.max_tokens, Some(800));
        // Scenario generation runs before any session exists.
        assert!(request.metadata.is_none());
        assert!(request.messages[0].content.contains("Generate a CIVIL case."));
    }

    #[test]
    fn parses_well_formed_ruling() {
        let response = "DECISION: SUSTAINED\n\nJUSTIFICATION: The statement is offered for \
                        its truth and no exception applies. Rule 802 controls.";
        let ruling = parse_ruling(response);
        assert_eq!(ruling.decision, RulingDecision::Sustained);
        assert!(ruling.justification.starts_with("The statement"));
        assert_eq!(ruling.rules_applied, vec!["Rule 802"]);
    }

    #[test]
    fn ruling_decision_parse_is_case_insensitive() {
        let ruling = parse_ruling("decision: overruled\njustification: It goes to weight.");
        assert_eq!(ruling.decision, RulingDecision::Overruled);
        assert_eq!(ruling.justification, "It goes to weight.");
    }

    #[test]
    fn malformed_ruling_falls_back_to_overruled_with_raw_text() {
        let response = "The objection lacks merit in my view.";
        let ruling = parse_ruling(response);
        assert_eq!(ruling.decision, RulingDecision::Overruled);
        assert_eq!(ruling.justification, response);
    }

    #[test]
    fn parses_scenario_with_surrounding_prose() {
        let response = r#"Here is your scenario:
{
  "caseType": "CRIMINAL",
  "parties": {"defendant": "Marcus Webb", "prosecution": "State of Ohio"},
  "claims": "armed robbery of a convenience store",
  "keyFacts": "- Store robbed at 11pm\n- Clerk identified defendant",
  "witness": {"name": "Dana Ellis", "role": "Store clerk", "background": "Worked nights for three years."},
  "scenarioSummary": "A clerk identifies the defendant in a robbery trial."
}
Enjoy!"#;
        let scenario = parse_scenario(response);
        assert_eq!(scenario.case_data.case_type, CaseType::Criminal);
        assert_eq!(scenario.case_data.parties.defendant.as_deref(), Some("Marcus Webb"));
        assert_eq!(scenario.witness.name, "Dana Ellis");
        assert_eq!(scenario.case_data.examination_type, ExaminationType::Direct);
        assert!(!scenario.summary.is_empty());
    }

    #[test]
    fn unparseable_scenario_uses_defaults() {
        let scenario = parse_scenario("I can't do that.");
        assert_eq!(scenario.case_data.case_type, CaseType::Civil);
        assert_eq!(scenario.witness.name, "Unknown Witness");
        assert_eq!(scenario.witness.role, "Witness");
        assert!(scenario.summary.is_empty());
    }

    #[test]
    fn system_prompt_embeds_catalog_rules() {
        let prompt = CourtroomGenerator::system_prompt(RulesetType::Fre);
        assert!(prompt.contains("Rule 802: The Rule Against Hearsay"));
        assert!(prompt.contains("Rule 611(c)"));

        let mock_prompt = CourtroomGenerator::system_prompt(RulesetType::MockTrial);
        assert!(mock_prompt.contains("Mock Trial"));
    }
}

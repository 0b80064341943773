//! Script parser - turns a raw pasted Q&A block into ordered pairs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One question/answer pair from a scripted examination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedQa {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    /// Emission order, starting at 0.
    pub order: usize,
}

static QUESTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Q[:.]\s*").expect("valid question marker pattern"));
static ANSWER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^A[:.]\s*").expect("valid answer marker pattern"));

/// Parses a raw script into an ordered sequence of Q&A pairs.
///
/// Lines prefixed `Q:` or `Q.` (case-insensitive) set the pending question;
/// lines prefixed `A:` or `A.` emit a pair when a question is pending. A
/// question marker while another question is pending silently discards the
/// earlier one, and a trailing question with no answer is dropped. Lines
/// matching neither marker, and blank lines, are ignored.
pub fn parse_script(script_text: &str) -> Vec<ScriptedQa> {
    let mut pairs = Vec::new();
    let mut pending_question: Option<String> = None;

    for line in script_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(m) = QUESTION_MARKER.find(trimmed) {
            pending_question = Some(trimmed[m.end()..].trim().to_string());
        } else if let Some(m) = ANSWER_MARKER.find(trimmed) {
            if let Some(question) = pending_question.take() {
                let order = pairs.len();
                pairs.push(ScriptedQa {
                    id: Uuid::new_v4(),
                    question,
                    answer: trimmed[m.end()..].trim().to_string(),
                    order,
                });
            }
        }
    }

    pairs
}

//! Case facts, witness profiles, and generated scenarios.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;

/// Civil or criminal matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseType {
    Civil,
    Criminal,
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseType::Civil => "CIVIL",
            CaseType::Criminal => "CRIMINAL",
        };
        write!(f, "{}", s)
    }
}

/// Direct or cross examination; drives question style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExaminationType {
    Direct,
    Cross,
}

impl ExaminationType {
    /// Human-readable phrase for prompts.
    pub fn describe(&self) -> &'static str {
        match self {
            ExaminationType::Direct => "direct examination",
            ExaminationType::Cross => "cross-examination",
        }
    }
}

/// Named parties to the case. Civil cases name a plaintiff, criminal cases a
/// prosecution; both name a defendant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseParties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintiff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defendant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution: Option<String>,
}

/// User-supplied or generated case facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseData {
    pub id: Uuid,
    pub case_type: CaseType,
    pub parties: CaseParties,
    pub claims: String,
    pub key_facts: String,
    pub examination_type: ExaminationType,
    pub created_at: Timestamp,
}

impl CaseData {
    /// One-paragraph case context used to ground AI prompts.
    pub fn context_summary(&self) -> String {
        format!(
            "{} case: {}. Facts: {}",
            self.case_type, self.claims, self.key_facts
        )
    }
}

/// Witness identity and background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessData {
    pub name: String,
    /// "Plaintiff", "Expert", "Eyewitness", etc.
    pub role: String,
    pub background: String,
}

impl WitnessData {
    /// One-line witness context used to ground AI prompts.
    pub fn context_summary(&self) -> String {
        format!("{}, {}. {}", self.name, self.role, self.background)
    }
}

/// A fully AI-generated practice scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScenario {
    pub id: Uuid,
    pub case_data: CaseData,
    pub witness: WitnessData,
    pub summary: String,
    pub created_at: Timestamp,
}

/// What kind of case the user wants generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioPreference {
    Civil,
    Criminal,
    #[default]
    Random,
}

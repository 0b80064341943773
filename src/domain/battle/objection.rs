//! Objection cycle artifacts: objection, counter-argument, rebuttal, ruling,
//! and the completed battle record.

use serde::{Deserialize, Serialize};
use std::fmt;

use uuid::Uuid;

use crate::domain::foundation::{BattleId, EntryId, ObjectionId, Timestamp};

/// A user-raised evidentiary challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    pub id: ObjectionId,
    pub timestamp: Timestamp,
    /// Free-text label, e.g. "Hearsay".
    pub objection_name: String,
    /// Free-text grounds, may include a rule citation, e.g. "FRE 802".
    pub grounds: String,
    /// Full rule text the user attached, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_text: Option<String>,
    /// The question or answer being challenged.
    pub target_entry_id: EntryId,
}

impl Objection {
    /// Creates a new objection against the given transcript entry.
    pub fn new(
        objection_name: impl Into<String>,
        grounds: impl Into<String>,
        target_entry_id: EntryId,
    ) -> Self {
        Self {
            id: ObjectionId::new(),
            timestamp: Timestamp::now(),
            objection_name: objection_name.into(),
            grounds: grounds.into(),
            rule_text: None,
            target_entry_id,
        }
    }

    /// Attaches the cited rule's full text.
    pub fn with_rule_text(mut self, text: impl Into<String>) -> Self {
        self.rule_text = Some(text.into());
        self
    }

    /// The line recorded in the transcript when this objection is raised.
    pub fn announcement(&self) -> String {
        format!("Objection! {}. {}", self.objection_name, self.grounds)
    }
}

/// AI-generated rebuttal to the objection, argued by examining counsel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterArgument {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub content: String,
    /// Rule citations extracted from the argument text.
    pub cited_rules: Vec<String>,
}

impl CounterArgument {
    /// Creates a counter-argument with extracted citations.
    pub fn new(content: impl Into<String>, cited_rules: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Timestamp::now(),
            content: content.into(),
            cited_rules,
        }
    }
}

/// The user's reply to the counter-argument. Only present in the multi-step
/// objection flow; the single-sequence flow never populates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rebuttal {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub content: String,
}

impl Rebuttal {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Timestamp::now(),
            content: content.into(),
        }
    }
}

/// The judge's decision on an objection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RulingDecision {
    /// The objection prevails; the challenged content is excluded.
    Sustained,
    /// The objection fails; the challenged content stands.
    Overruled,
}

impl fmt::Display for RulingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RulingDecision::Sustained => "SUSTAINED",
            RulingDecision::Overruled => "OVERRULED",
        };
        write!(f, "{}", s)
    }
}

/// Terminal artifact of one objection cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeRuling {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub decision: RulingDecision,
    pub justification: String,
    /// Rule numbers cited in the justification.
    pub rules_applied: Vec<String>,
}

impl JudgeRuling {
    /// Creates a ruling.
    pub fn new(
        decision: RulingDecision,
        justification: impl Into<String>,
        rules_applied: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Timestamp::now(),
            decision,
            justification: justification.into(),
            rules_applied,
        }
    }

    /// The line recorded in the transcript when the ruling is delivered.
    pub fn announcement(&self) -> String {
        format!("{}. {}", self.decision, self.justification)
    }
}

/// Permanent record of one objection cycle. Immutable once appended to a
/// session's battle list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectionBattle {
    pub id: BattleId,
    pub objection: Objection,
    pub counter_argument: CounterArgument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebuttal: Option<Rebuttal>,
    pub ruling: JudgeRuling,
}

impl ObjectionBattle {
    /// Assembles the completed battle record.
    pub fn new(
        objection: Objection,
        counter_argument: CounterArgument,
        rebuttal: Option<Rebuttal>,
        ruling: JudgeRuling,
    ) -> Self {
        Self {
            id: BattleId::new(),
            objection,
            counter_argument,
            rebuttal,
            ruling,
        }
    }
}

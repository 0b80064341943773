//! Rule and ruleset value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Identifier of a registered ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RulesetType {
    /// Federal Rules of Evidence.
    Fre,
    /// Simplified rules for mock trial competitions.
    MockTrial,
}

impl fmt::Display for RulesetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RulesetType::Fre => "FRE",
            RulesetType::MockTrial => "MOCK_TRIAL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RulesetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FRE" => Ok(RulesetType::Fre),
            "MOCK_TRIAL" => Ok(RulesetType::MockTrial),
            other => Err(ValidationError::invalid_format(
                "ruleset",
                format!("Unknown ruleset '{}'", other),
            )),
        }
    }
}

/// A single evidentiary rule.
///
/// Reference data only, so the fields borrow from the compiled-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Rule number, e.g. "802" or "611(c)".
    pub number: &'static str,
    /// Short title.
    pub title: &'static str,
    /// Full rule text.
    pub text: &'static str,
    /// Objection labels commonly raised under this rule.
    pub common_objections: &'static [&'static str],
}

impl Rule {
    /// Returns true if any common objection label contains the given name,
    /// case-insensitively.
    pub fn matches_objection(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.common_objections
            .iter()
            .any(|obj| obj.to_lowercase().contains(&needle))
    }
}

/// A named ordered collection of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ruleset {
    /// Which registered ruleset this is.
    pub ruleset_type: RulesetType,
    /// Human-readable name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// The rules, in presentation order.
    pub rules: &'static [Rule],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruleset_type_parses_known_identifiers() {
        assert_eq!("FRE".parse::<RulesetType>().unwrap(), RulesetType::Fre);
        assert_eq!(
            "MOCK_TRIAL".parse::<RulesetType>().unwrap(),
            RulesetType::MockTrial
        );
    }

    #[test]
    fn ruleset_type_rejects_unknown_identifier() {
        assert!("STATE_RULES".parse::<RulesetType>().is_err());
    }

    #[test]
    fn ruleset_type_display_roundtrips() {
        for t in [RulesetType::Fre, RulesetType::MockTrial] {
            assert_eq!(t.to_string().parse::<RulesetType>().unwrap(), t);
        }
    }

    #[test]
    fn rule_matches_objection_is_case_insensitive_substring() {
        let rule = Rule {
            number: "802",
            title: "The Rule Against Hearsay",
            text: "Hearsay is not admissible...",
            common_objections: &["Hearsay", "Inadmissible Hearsay"],
        };
        assert!(rule.matches_objection("hearsay"));
        assert!(rule.matches_objection("HEAR"));
        assert!(!rule.matches_objection("leading"));
    }
}

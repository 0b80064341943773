//! Compiled-in ruleset catalog and lookup functions.

use super::{Rule, Ruleset, RulesetType};

const FRE_RULES: &[Rule] = &[
    Rule {
        number: "401",
        title: "Test for Relevant Evidence",
        text: "Evidence is relevant if: (a) it has any tendency to make a fact more or less \
               probable than it would be without the evidence; and (b) the fact is of consequence \
               in determining the action.",
        common_objections: &["Irrelevant", "Not Relevant", "Lacks Relevance"],
    },
    Rule {
        number: "402",
        title: "General Admissibility of Relevant Evidence",
        text: "Relevant evidence is admissible unless any of the following provides otherwise: \
               the United States Constitution; a federal statute; these rules; or other rules \
               prescribed by the Supreme Court. Irrelevant evidence is not admissible.",
        common_objections: &["Irrelevant", "Inadmissible"],
    },
    Rule {
        number: "403",
        title: "Excluding Relevant Evidence for Prejudice, Confusion, or Other Reasons",
        text: "The court may exclude relevant evidence if its probative value is substantially \
               outweighed by a danger of one or more of the following: unfair prejudice, \
               confusing the issues, misleading the jury, undue delay, wasting time, or \
               needlessly presenting cumulative evidence.",
        common_objections: &[
            "Unfairly Prejudicial",
            "More Prejudicial than Probative",
            "Waste of Time",
        ],
    },
    Rule {
        number: "602",
        title: "Need for Personal Knowledge",
        text: "A witness may testify to a matter only if evidence is introduced sufficient to \
               support a finding that the witness has personal knowledge of the matter. Evidence \
               to prove personal knowledge may consist of the witness's own testimony. This rule \
               does not apply to a witness's expert testimony under Rule 703.",
        common_objections: &["Lacks Personal Knowledge", "No Foundation", "Speculation"],
    },
    Rule {
        number: "611(c)",
        title: "Leading Questions",
        text: "Leading questions should not be used on direct examination except as necessary to \
               develop the witness's testimony. Ordinarily, the court should allow leading \
               questions: (1) on cross-examination; and (2) when a party calls a hostile \
               witness, an adverse party, or a witness identified with an adverse party.",
        common_objections: &["Leading", "Leading Question on Direct"],
    },
    Rule {
        number: "701",
        title: "Opinion Testimony by Lay Witnesses",
        text: "If a witness is not testifying as an expert, testimony in the form of an opinion \
               is limited to one that is: (a) rationally based on the witness's perception; \
               (b) helpful to clearly understanding the witness's testimony or to determining a \
               fact in issue; and (c) not based on scientific, technical, or other specialized \
               knowledge within the scope of Rule 702.",
        common_objections: &[
            "Improper Lay Opinion",
            "Calls for Speculation",
            "Opinion Not Rationally Based",
        ],
    },
    Rule {
        number: "802",
        title: "The Rule Against Hearsay",
        text: "Hearsay is not admissible unless any of the following provides otherwise: a \
               federal statute; these rules; or other rules prescribed by the Supreme Court. \
               Hearsay is a statement that: (1) the declarant does not make while testifying at \
               the current trial or hearing; and (2) a party offers in evidence to prove the \
               truth of the matter asserted in the statement.",
        common_objections: &["Hearsay", "Inadmissible Hearsay"],
    },
    Rule {
        number: "803",
        title: "Exceptions to the Rule Against Hearsay",
        text: "The following are not excluded by the rule against hearsay, regardless of whether \
               the declarant is available as a witness: present sense impression, excited \
               utterance, then-existing mental/emotional/physical condition, statement made for \
               medical diagnosis or treatment, recorded recollection, records of regularly \
               conducted activity (business records), public records, and others.",
        common_objections: &["Hearsay (no exception applies)", "Does Not Qualify for Exception"],
    },
    Rule {
        number: "901",
        title: "Authenticating or Identifying Evidence",
        text: "To satisfy the requirement of authenticating or identifying an item of evidence, \
               the proponent must produce evidence sufficient to support a finding that the item \
               is what the proponent claims it is.",
        common_objections: &["Lack of Authentication", "Not Authenticated", "Lack of Foundation"],
    },
    Rule {
        number: "1002",
        title: "Requirement of the Original (Best Evidence Rule)",
        text: "An original writing, recording, or photograph is required in order to prove its \
               content unless these rules or a federal statute provides otherwise.",
        common_objections: &["Best Evidence Rule", "Original Required", "Not the Best Evidence"],
    },
];

const MOCK_TRIAL_RULES: &[Rule] = &[
    Rule {
        number: "1",
        title: "Relevance",
        text: "Evidence must relate to the case and help prove or disprove an important fact.",
        common_objections: &["Irrelevant", "Not Relevant"],
    },
    Rule {
        number: "2",
        title: "Leading Questions",
        text: "Questions that suggest the answer are not allowed on direct examination, but are \
               allowed on cross-examination.",
        common_objections: &["Leading", "Leading on Direct"],
    },
    Rule {
        number: "3",
        title: "Hearsay",
        text: "A witness cannot testify about what someone else said outside of court if offered \
               to prove the truth of what was said.",
        common_objections: &["Hearsay"],
    },
    Rule {
        number: "4",
        title: "Personal Knowledge",
        text: "A witness must have personally seen, heard, or experienced what they are \
               testifying about.",
        common_objections: &["Lacks Personal Knowledge", "Speculation"],
    },
    Rule {
        number: "5",
        title: "Opinion Testimony",
        text: "Witnesses can only give opinions if they are helpful and based on what the \
               witness personally observed.",
        common_objections: &["Improper Opinion", "Calls for Speculation"],
    },
    Rule {
        number: "6",
        title: "Authentication",
        text: "Documents and physical evidence must be shown to be genuine before being \
               admitted.",
        common_objections: &["Not Authenticated", "Lack of Foundation"],
    },
    Rule {
        number: "7",
        title: "Unfair Prejudice",
        text: "Evidence can be excluded if it would be unfairly harmful or misleading.",
        common_objections: &["Unfairly Prejudicial", "More Prejudicial than Probative"],
    },
];

const FRE_RULESET: Ruleset = Ruleset {
    ruleset_type: RulesetType::Fre,
    name: "Federal Rules of Evidence",
    description: "Full Federal Rules of Evidence with comprehensive coverage of evidentiary \
                  rules used in federal courts.",
    rules: FRE_RULES,
};

const MOCK_TRIAL_RULESET: Ruleset = Ruleset {
    ruleset_type: RulesetType::MockTrial,
    name: "Simplified Mock Trial Rules",
    description: "Simplified evidence rules designed for mock trial competitions and \
                  educational purposes.",
    rules: MOCK_TRIAL_RULES,
};

/// Returns the ruleset registered under the given identifier.
///
/// The `RulesetType` enum constrains callers to registered identifiers, so
/// this lookup is total.
pub fn ruleset(ruleset_type: RulesetType) -> &'static Ruleset {
    match ruleset_type {
        RulesetType::Fre => &FRE_RULESET,
        RulesetType::MockTrial => &MOCK_TRIAL_RULESET,
    }
}

/// Returns all registered rulesets.
pub fn all_rulesets() -> &'static [Ruleset] {
    static ALL: [Ruleset; 2] = [FRE_RULESET, MOCK_TRIAL_RULESET];
    &ALL
}

/// Finds a rule by its number within a ruleset.
pub fn find_rule(rule_number: &str, ruleset_type: RulesetType) -> Option<&'static Rule> {
    ruleset(ruleset_type)
        .rules
        .iter()
        .find(|rule| rule.number == rule_number)
}

/// Returns the deduplicated, sorted union of common objection labels across
/// the ruleset's rules.
pub fn all_objections(ruleset_type: RulesetType) -> Vec<&'static str> {
    let mut objections: Vec<&'static str> = ruleset(ruleset_type)
        .rules
        .iter()
        .flat_map(|rule| rule.common_objections.iter().copied())
        .collect();
    objections.sort_unstable();
    objections.dedup();
    objections
}

/// Returns all rules whose common objection labels contain the given name,
/// case-insensitively.
pub fn find_rules_by_objection(name: &str, ruleset_type: RulesetType) -> Vec<&'static Rule> {
    ruleset(ruleset_type)
        .rules
        .iter()
        .filter(|rule| rule.matches_objection(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fre_ruleset_has_ten_rules() {
        assert_eq!(ruleset(RulesetType::Fre).rules.len(), 10);
    }

    #[test]
    fn mock_trial_ruleset_has_seven_rules() {
        assert_eq!(ruleset(RulesetType::MockTrial).rules.len(), 7);
    }

    #[test]
    fn find_rule_locates_hearsay() {
        let rule = find_rule("802", RulesetType::Fre).unwrap();
        assert_eq!(rule.title, "The Rule Against Hearsay");
    }

    #[test]
    fn find_rule_misses_unknown_number() {
        assert!(find_rule("9999", RulesetType::Fre).is_none());
    }

    #[test]
    fn all_objections_is_sorted_and_deduplicated() {
        let objections = all_objections(RulesetType::Fre);

        // "Irrelevant" appears under both 401 and 402 but only once here.
        assert_eq!(objections.iter().filter(|o| **o == "Irrelevant").count(), 1);

        let mut sorted = objections.clone();
        sorted.sort_unstable();
        assert_eq!(objections, sorted);
    }

    #[test]
    fn find_rules_by_objection_matches_substring_case_insensitively() {
        let rules = find_rules_by_objection("hearsay", RulesetType::Fre);
        let numbers: Vec<&str> = rules.iter().map(|r| r.number).collect();
        assert!(numbers.contains(&"802"));
        assert!(numbers.contains(&"803"));
    }

    #[test]
    fn find_rules_by_objection_returns_empty_for_no_match() {
        assert!(find_rules_by_objection("chain of custody", RulesetType::MockTrial).is_empty());
    }

    #[test]
    fn all_rulesets_lists_both() {
        let types: Vec<RulesetType> = all_rulesets().iter().map(|r| r.ruleset_type).collect();
        assert_eq!(types, vec![RulesetType::Fre, RulesetType::MockTrial]);
    }
}

//! Ruleset module - static evidentiary reference data.
//!
//! A ruleset is a named ordered collection of rules; each rule carries the
//! objection labels commonly raised under it. Rulesets are compiled-in
//! reference data and never mutated at runtime.

mod catalog;
mod rule;

pub use catalog::{all_objections, all_rulesets, find_rule, find_rules_by_objection, ruleset};
pub use rule::{Rule, Ruleset, RulesetType};

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `ruleset` - Static evidentiary rules reference data
//! - `script` - Scripted examination parsing
//! - `battle` - Session aggregate, objection flow, and the battle engine

pub mod battle;
pub mod foundation;
pub mod ruleset;
pub mod script;

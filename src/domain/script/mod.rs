//! Script module - parsing of pasted question/answer scripts.

mod parser;

pub use parser::{parse_script, ScriptedQa};

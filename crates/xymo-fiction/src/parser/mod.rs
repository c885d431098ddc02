//! Command parsing and entity resolution.

mod command;
mod resolver;

pub use command::{Command, parse_command, tokenize};
pub use resolver::{EntityRef, Scope, candidates, label_of, resolve_by_label, resolve_in};

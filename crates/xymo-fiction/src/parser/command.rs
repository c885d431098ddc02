//! Command parsing for player input.

use crate::error::{FictionError, FictionResult};

/// A parsed player command. Labels are lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the command list.
    Help,
    /// Describe storage and surroundings.
    Status,
    /// Go through a connection.
    Enter {
        /// Connection label.
        connection: String,
    },
    /// Scan a connection or an item on the floor.
    Inspect {
        /// Connection or item label.
        target: String,
    },
    /// Use an item on a connection.
    Use {
        /// Item label.
        item: String,
        /// Connection label.
        target: String,
    },
    /// Pick an item up into storage.
    Stow {
        /// Item label.
        item: String,
    },
    /// Put an item from storage down.
    Drop {
        /// Item label.
        item: String,
    },
}

const MISSING_LOCATION: &str = "Missing <loc>.";
const MISSING_INSPECT_TARGET: &str = "Missing -obj- to inspect.";
const MISSING_USE_ITEM: &str = "Missing -item- to use.";
const MISSING_ITEM: &str = "Syntax error: missing -item-.";

/// Split input on whitespace and lowercase every token.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// Parse a player input line into a command.
///
/// Only the first token selects the command. Tokens beyond those a command
/// reads are ignored, except for `use`, which must be exactly
/// `use <item> on <obj>`.
pub fn parse_command(input: &str) -> FictionResult<Command> {
    let tokens = tokenize(input);
    let Some(verb) = tokens.first() else {
        return Err(FictionError::UnknownCommand(String::new()));
    };
    let arg = |index: usize, missing: &'static str| {
        tokens
            .get(index)
            .cloned()
            .ok_or(FictionError::MissingArgument(missing))
    };

    match verb.as_str() {
        "help" => Ok(Command::Help),
        "status" => Ok(Command::Status),
        "enter" => Ok(Command::Enter {
            connection: arg(1, MISSING_LOCATION)?,
        }),
        "inspect" => Ok(Command::Inspect {
            target: arg(1, MISSING_INSPECT_TARGET)?,
        }),
        "use" => parse_use(&tokens),
        "stow" => Ok(Command::Stow {
            item: arg(1, MISSING_ITEM)?,
        }),
        "drop" => Ok(Command::Drop {
            item: arg(1, MISSING_ITEM)?,
        }),
        _ => Err(FictionError::UnknownCommand(verb.clone())),
    }
}

fn parse_use(tokens: &[String]) -> FictionResult<Command> {
    match tokens {
        [_] => Err(FictionError::MissingArgument(MISSING_USE_ITEM)),
        [_, item, on, target] if on == "on" => Ok(Command::Use {
            item: item.clone(),
            target: target.clone(),
        }),
        _ => Err(FictionError::InvalidSyntax),
    }
}

//! Error types for the interpreter.
//!
//! Every variant's `Display` text is the exact line shown to the player.

use std::fmt;

use thiserror::Error;
use xymo_core::WorldError;

use crate::narrator::capitalize;

/// Result type for interpreter operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Which scope a label failed to resolve in. Each scope has its own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundScope {
    /// `enter` and `inspect` targets.
    Surroundings,
    /// Items on the floor of the current location (`stow`).
    Room,
    /// Items in the player's storage (`drop`).
    Storage,
    /// Items on the floor or in storage (`use` item).
    NearbyOrStorage,
    /// Connections of the current location (`use` target).
    Object,
}

impl fmt::Display for NotFoundScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surroundings => write!(f, "Unrecognized command: "),
            Self::Room => write!(f, "Item not in room: "),
            Self::Storage => write!(f, "Item not in storage: "),
            Self::NearbyOrStorage => write!(f, "Item not nearby or in storage module: "),
            Self::Object => write!(f, "Could not locate object: "),
        }
    }
}

/// Errors that can occur while interpreting a command.
///
/// None of these end the session; they are reported as a single line.
#[derive(Debug, Error)]
pub enum FictionError {
    /// First token is not a known command.
    #[error("Command not recognized. Type \"help\" for help.")]
    UnknownCommand(String),

    /// A required argument is absent. Holds the command-specific message.
    #[error("{0}")]
    MissingArgument(&'static str),

    /// `use` was not shaped as `use <item> on <obj>`.
    #[error("Incorrect syntax. Try:  use -item- on -obj-")]
    InvalidSyntax,

    /// A label did not match anything in the searched scope.
    #[error("{scope}{label}")]
    EntityNotFound {
        /// The scope that was searched.
        scope: NotFoundScope,
        /// The label as typed.
        label: String,
    },

    /// `use` on a face that is already unlocked.
    #[error("Action had no effect. {} already unlocked.", capitalize(.0))]
    AlreadyUnlocked(String),

    /// `use` with an item the lock does not take.
    #[error("Object {object} does not accept {item}")]
    NotAccepted {
        /// Connection label.
        object: String,
        /// Item label.
        item: String,
    },

    /// `enter` through a locked face.
    #[error("{} is locked.", capitalize(.0))]
    Locked(String),

    /// World data referenced something that does not exist.
    #[error("world error: {0}")]
    World(#[from] WorldError),
}

impl FictionError {
    /// Shorthand for a failed label lookup.
    pub fn not_found(scope: NotFoundScope, label: impl Into<String>) -> Self {
        Self::EntityNotFound {
            scope,
            label: label.into(),
        }
    }
}

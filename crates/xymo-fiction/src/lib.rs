//! Command interpreter for XYMO.
//!
//! Turns single lines of player input into world mutations and lines of
//! console output. Input is tokenized and parsed into a [`Command`], labels
//! are resolved against an ordered scope of nearby entities, and every
//! response (including every failure) is emitted through an
//! [`OutputSink`].

/// Session configuration.
pub mod config;
/// Error types for the interpreter.
pub mod error;
/// Fixed texts and status rendering.
pub mod narrator;
/// Output sink contract and an in-memory transcript.
pub mod output;
/// Command parsing and entity resolution.
pub mod parser;
/// Interactive session management.
pub mod session;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult, NotFoundScope};
pub use output::{OutputLine, OutputSink, Transcript};
pub use parser::{Command, EntityRef, Scope, parse_command, resolve_by_label, tokenize};
pub use session::FictionSession;

//! Terminal output sink.

use std::io::{self, Write};

use colored::Colorize;
use xymo_fiction::OutputSink;

/// Prompt printed after every line that awaits input.
const PROMPT: &str = "> ";

/// Writes session output to a terminal-like stream, in green when color is
/// enabled, with a prompt after every unsuppressed line.
pub struct ConsoleSink<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            error: None,
        }
    }

    /// Print a bare prompt, for when no line has printed one yet.
    pub fn prompt(&mut self) {
        let result = write!(self.out, "{PROMPT}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn write_line(&mut self, line: &str, suppress_separator: bool) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", line.green())?;
        } else {
            writeln!(self.out, "{line}")?;
        }
        if !suppress_separator {
            write!(self.out, "\n{PROMPT}")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, line: &str, suppress_separator: bool) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_line(line, suppress_separator) {
            self.error = Some(e);
        }
    }
}

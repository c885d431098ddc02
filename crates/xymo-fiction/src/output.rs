//! The narrow contract between the interpreter and whatever displays its
//! output.

/// Marker shown after a line when the console awaits input.
pub const CARET: &str = "\n\n> ";

/// Receives lines of console output in order.
pub trait OutputSink {
    /// Append one line to the visible transcript. Unless
    /// `suppress_separator` is set, the display follows it with an
    /// awaiting-input marker.
    fn emit(&mut self, line: &str, suppress_separator: bool);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, line: &str, suppress_separator: bool) {
        (**self).emit(line, suppress_separator);
    }
}

/// One emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// The text, which may itself contain newlines.
    pub text: String,
    /// Whether the awaiting-input marker was suppressed after it.
    pub suppress_separator: bool,
}

/// An in-memory sink that records every line.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in order.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Just the texts of the recorded lines.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// The most recent line, if any.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|line| line.text.as_str())
    }

    /// Render the transcript the way a console shows it: each line on its
    /// own row, followed by the caret unless suppressed.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.text);
            if !line.suppress_separator {
                out.push_str(CARET);
            }
        }
        out
    }
}

impl OutputSink for Transcript {
    fn emit(&mut self, line: &str, suppress_separator: bool) {
        self.lines.push(OutputLine {
            text: line.to_string(),
            suppress_separator,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.emit("one", true);
        transcript.emit("two", false);
        assert_eq!(transcript.texts(), vec!["one", "two"]);
        assert!(transcript.lines()[0].suppress_separator);
        assert!(!transcript.lines()[1].suppress_separator);
        assert_eq!(transcript.last(), Some("two"));
    }

    #[test]
    fn render_places_caret_after_unsuppressed_lines() {
        let mut transcript = Transcript::new();
        transcript.emit("Heavy -door- with entry control.", true);
        transcript.emit("No further information available on close inspection.", false);
        assert_eq!(
            transcript.render(),
            "\nHeavy -door- with entry control.\nNo further information available on close inspection.\n\n> "
        );
    }

    #[test]
    fn mutable_reference_is_a_sink() {
        fn emit_twice(mut sink: impl OutputSink) {
            sink.emit("a", true);
            sink.emit("b", false);
        }
        let mut transcript = Transcript::new();
        emit_twice(&mut transcript);
        assert_eq!(transcript.texts(), vec!["a", "b"]);
    }
}

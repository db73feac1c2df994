//! The line selector: tokenize, pick fields, write.
//!
//! ## Per-Line Algorithm
//!
//! ```text
//! ranges = ["3", "1:2"], line = "a  b\tc d"
//!
//! fields:  [a, b, c, d]
//! "3"   -> 2..=2  -> "c "
//! "1:2" -> 0..=1  -> "a b "
//! output:            "c a b \n"
//! ```
//!
//! Every selected field is followed by one space, and every processed
//! line ends with `\n`, even when nothing was selected.
//!
//! ## Stopping
//!
//! There are two ways a run ends, and they are not the same thing as a
//! line that tokenizes to nothing:
//!
//! | Input line       | Fields | Effect                       |
//! |------------------|--------|------------------------------|
//! | end of stream    | -      | stop ([`Termination::EndOfInput`]) |
//! | `""`             | -      | stop ([`Termination::EmptyLine`])  |
//! | `"   "`          | 0      | write `"\n"`, keep going     |
//! | `"a b"`          | 2      | write selection, keep going  |

use std::io::{BufRead, Write};
use std::ops::Range;

use crate::{Config, Result};

/// Why [`Selector::run`] stopped reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The input stream was exhausted.
    EndOfInput,
    /// A zero-length line was read; nothing after it was consumed.
    EmptyLine,
}

/// Counters from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines consumed from the input, including a terminating empty line.
    pub lines_read: usize,
    /// Lines written to the output.
    pub lines_written: usize,
    /// What ended the run.
    pub termination: Termination,
}

/// Applies a [`Config`] to lines of text.
///
/// ## Example
///
/// ```rust
/// use fieldcut::{Command, Config, Selector, Termination};
///
/// let Command::Run(config) = Config::from_args(["2:3"]).unwrap() else {
///     unreachable!()
/// };
/// let selector = Selector::new(config);
///
/// let mut out = Vec::new();
/// let summary = selector.run(&b"a b c d\nw x y z\n"[..], &mut out).unwrap();
///
/// assert_eq!(out, b"b c \nx y \n");
/// assert_eq!(summary.termination, Termination::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Selector {
    config: Config,
}

impl Selector {
    /// Create a selector for `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this selector applies.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Spans of the selected fields, in output order.
    fn selected<'a>(
        &'a self,
        spans: &'a [Range<usize>],
    ) -> impl Iterator<Item = &'a Range<usize>> + 'a {
        self.config
            .ranges()
            .iter()
            .filter_map(move |range| range.resolve(spans.len()))
            .flat_map(move |indices| &spans[indices])
    }

    /// Write the selection for one line (without its terminator) to `out`.
    ///
    /// `line` is raw bytes; anything that is not a delimiter is copied
    /// through unchanged. `spans` is scratch space; its previous contents
    /// are discarded.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn select_line<W: Write>(
        &self,
        line: &[u8],
        spans: &mut Vec<Range<usize>>,
        out: &mut W,
    ) -> std::io::Result<()> {
        self.config.delimiters().split_into(line, spans);

        for span in self.selected(spans) {
            out.write_all(&line[span.clone()])?;
            out.write_all(b" ")?;
        }

        out.write_all(b"\n")
    }

    /// The selection for one line as a string, terminator included.
    #[must_use]
    pub fn select_to_string(&self, line: &str) -> String {
        let mut spans = Vec::new();
        self.config.delimiters().split_into(line.as_bytes(), &mut spans);

        let mut out = String::with_capacity(line.len() + 1);
        for span in self.selected(&spans) {
            // Spans from valid UTF-8 sit on char boundaries
            out.push_str(&line[span.clone()]);
            out.push(' ');
        }
        out.push('\n');
        out
    }

    /// Filter `input` into `output` until end of stream or an empty line.
    ///
    /// Lines are handled as bytes, so input need not be valid UTF-8. A
    /// final line without a trailing `\n` is still processed. `output` is
    /// flushed before returning successfully.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Summary> {
        let mut line = Vec::new();
        let mut spans = Vec::new();
        let mut lines_read = 0;
        let mut lines_written = 0;

        let termination = loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break Termination::EndOfInput;
            }
            lines_read += 1;

            let text = line.strip_suffix(b"\n").unwrap_or(&line[..]);
            if text.is_empty() {
                break Termination::EmptyLine;
            }

            self.select_line(text, &mut spans, &mut output)?;
            lines_written += 1;
        };

        output.flush()?;

        Ok(Summary {
            lines_read,
            lines_written,
            termination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    fn selector(args: &[&str]) -> Selector {
        match Config::from_args(args) {
            Ok(Command::Run(config)) => Selector::new(config),
            other => panic!("bad args {args:?}: {other:?}"),
        }
    }

    fn run(args: &[&str], input: &str) -> (String, Summary) {
        let mut out = Vec::new();
        let summary = selector(args).run(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_whole_line_default() {
        assert_eq!(selector(&[]).select_to_string("a b c"), "a b c \n");
    }

    #[test]
    fn test_inner_range() {
        assert_eq!(selector(&["2:3"]).select_to_string("a b c d"), "b c \n");
    }

    #[test]
    fn test_out_of_bounds_is_silent() {
        assert_eq!(selector(&["5:"]).select_to_string("a b c"), "\n");
        assert_eq!(selector(&["2:10"]).select_to_string("a b c"), "b c \n");
        assert_eq!(selector(&["7"]).select_to_string("a b c"), "\n");
    }

    #[test]
    fn test_ranges_in_given_order() {
        assert_eq!(
            selector(&["3", "1:2", "2:"]).select_to_string("a b c"),
            "c a b b c \n"
        );
    }

    #[test]
    fn test_delimiter_only_line() {
        assert_eq!(selector(&[]).select_to_string(" \t "), "\n");
    }

    #[test]
    fn test_end_of_input() {
        let (out, summary) = run(&["1"], "a b\nc d\n");
        assert_eq!(out, "a \nc \n");
        assert_eq!(
            summary,
            Summary {
                lines_read: 2,
                lines_written: 2,
                termination: Termination::EndOfInput,
            }
        );
    }

    #[test]
    fn test_unterminated_last_line() {
        let (out, summary) = run(&["2"], "a b\nc d");
        assert_eq!(out, "b \nd \n");
        assert_eq!(summary.lines_written, 2);
    }

    #[test]
    fn test_empty_line_stops() {
        let (out, summary) = run(&[], "a\n\nb\nc\n");
        assert_eq!(out, "a \n");
        assert_eq!(summary.termination, Termination::EmptyLine);
        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.lines_written, 1);
    }

    #[test]
    fn test_blank_line_continues() {
        let (out, summary) = run(&[], "a\n   \nb\n");
        assert_eq!(out, "a \n\nb \n");
        assert_eq!(summary.termination, Termination::EndOfInput);
    }

    #[test]
    fn test_empty_input() {
        let (out, summary) = run(&[], "");
        assert!(out.is_empty());
        assert_eq!(summary.lines_read, 0);
        assert_eq!(summary.termination, Termination::EndOfInput);
    }

    #[test]
    fn test_carriage_return_is_data() {
        assert_eq!(selector(&["2"]).select_to_string("a b\r"), "b\r \n");
        assert_eq!(selector(&["-d", " \r", "2"]).select_to_string("a b\r"), "b \n");
    }

    #[test]
    fn test_non_utf8_line_is_processed() {
        let input: &[u8] = b"a b\ncaf\xe9 x\nc d\n";

        let mut out = Vec::new();
        let summary = selector(&["2"]).run(input, &mut out).unwrap();
        assert_eq!(out, b"b \nx \nd \n");
        assert_eq!(summary.lines_written, 3);

        let mut out = Vec::new();
        selector(&["1"]).run(input, &mut out).unwrap();
        assert_eq!(out, b"a \ncaf\xe9 \nc \n");
    }

    #[test]
    fn test_select_line_into_writer() {
        let selector = selector(&["-d", ",", "3", "1"]);
        assert_eq!(selector.config().ranges().len(), 2);

        let mut spans = Vec::new();
        let mut out = Vec::new();
        selector.select_line(b"x,,y,z", &mut spans, &mut out).unwrap();
        selector.select_line(b",,", &mut spans, &mut out).unwrap();
        assert_eq!(out, b"z x \n\n");
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = selector(&[]).run(&b"a\n"[..], Closed).unwrap_err();
        assert!(matches!(err, crate::Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }
}

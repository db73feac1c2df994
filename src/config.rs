//! Run configuration and the command-line scanner.
//!
//! ```text
//! fieldcut [-h|--help] [-d|--delimiters <delim>] [<range>...]
//! ```
//!
//! Tokens are scanned left to right. The first bad token aborts the scan
//! with a [`UsageError`]; `--help` only takes effect once the whole
//! command line has scanned cleanly.

use std::ffi::OsStr;

use crate::error::UsageError;
use crate::{parse_field_range, Delimiters, Error, FieldRange, Result};

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the help text and exit successfully.
    Help,
    /// Filter input with this configuration.
    Run(Config),
}

/// Delimiters plus the ordered ranges to emit. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    delimiters: Delimiters,
    ranges: Vec<FieldRange>,
}

impl Config {
    /// Create a configuration.
    ///
    /// An empty `ranges` selects the whole line.
    #[must_use]
    pub fn new(delimiters: Delimiters, ranges: Vec<FieldRange>) -> Self {
        let ranges = if ranges.is_empty() {
            vec![FieldRange::whole_line()]
        } else {
            ranges
        };
        Self { delimiters, ranges }
    }

    /// The field separators.
    #[must_use]
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Ranges in the order they are emitted. Never empty.
    #[must_use]
    pub fn ranges(&self) -> &[FieldRange] {
        &self.ranges
    }

    /// Scan command-line arguments, not including the program name.
    ///
    /// Arguments are taken as `OsStr` so that a token which is not valid
    /// UTF-8 is reported as a usage error rather than aborting the scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] for an unknown flag, a missing, empty or
    /// non-UTF-8 delimiter list, or a malformed range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcut::{Command, Config};
    ///
    /// let Command::Run(config) = Config::from_args(["-d", ",", "2:"]).unwrap() else {
    ///     unreachable!()
    /// };
    /// assert_eq!(config.ranges().len(), 1);
    /// assert!(config.delimiters().contains(','));
    ///
    /// assert_eq!(Config::from_args(["--help"]).unwrap(), Command::Help);
    /// assert!(Config::from_args(["-x"]).is_err());
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut iter = args.into_iter();
        let mut help = false;
        let mut delimiters = None;
        let mut ranges = Vec::new();

        while let Some(arg) = iter.next() {
            let arg = arg.as_ref();
            let Some(arg) = arg.to_str() else {
                return Err(non_utf8_token(arg));
            };
            match arg {
                "-h" | "--help" => help = true,
                "-d" | "--delimiters" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| UsageError::MissingDelimiters(arg.to_string()))?;
                    let value = value.as_ref();
                    let chars = value.to_str().ok_or_else(|| {
                        UsageError::InvalidDelimiters(value.to_string_lossy().into_owned())
                    })?;
                    delimiters = Some(Delimiters::new(chars)?);
                }
                _ if arg.starts_with('-') => {
                    return Err(UsageError::InvalidOption(arg.to_string()).into());
                }
                _ => {
                    let range = parse_field_range(arg).map_err(|source| {
                        UsageError::InvalidFieldRange {
                            range: arg.to_string(),
                            source: Box::new(source),
                        }
                    })?;
                    ranges.push(range);
                }
            }
        }

        if help {
            return Ok(Command::Help);
        }

        Ok(Command::Run(Self::new(
            delimiters.unwrap_or_default(),
            ranges,
        )))
    }
}

/// Classify a token that is not valid UTF-8 the way its text would be.
fn non_utf8_token(arg: &OsStr) -> Error {
    let lossy = arg.to_string_lossy().into_owned();
    if lossy.starts_with('-') {
        UsageError::InvalidOption(lossy).into()
    } else {
        UsageError::InvalidFieldRange {
            source: Box::new(Error::invalid_format(lossy.clone())),
            range: lossy,
        }
        .into()
    }
}

impl Default for Config {
    /// Whitespace-separated, whole line.
    fn default() -> Self {
        Self::new(Delimiters::default(), Vec::new())
    }
}

/// Full help text for `--help`.
#[must_use]
pub fn help_text(prog: &str) -> String {
    format!(
        "Usage: {prog} [OPTION]... [RANGE]...
Print selected fields of each line of standard input.

Fields are separated by runs of one or more delimiter characters, so
repeated delimiters never produce empty fields. Selected fields are
written separated by single spaces. Input stops at the first empty line.

Options:
  -d, --delimiters <DELIM>  use the characters of DELIM as delimiters
                            (default: space and tab)
  -h, --help                display this help and exit

Ranges (fields are numbered from 1, bounds are inclusive):
  N      field N
  N:     field N through the last field
  N:M    fields N through M
  :M     first field through field M

With no RANGE, every field is printed. Ranges are printed in the order
given.
"
    )
}

/// The one-line hint printed after a usage error.
#[must_use]
pub fn usage_hint(prog: &str) -> String {
    format!("Try '{prog} --help' for more information.")
}

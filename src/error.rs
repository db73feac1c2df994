//! Error types for fieldcut.

/// Errors that can occur while configuring or running a selection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field number or range expression could not be parsed.
    ///
    /// Covers non-numeric text, the field number `0`, more than one `:`,
    /// and ranges whose begin lies after their end.
    #[error("invalid format: {input:?}")]
    InvalidFormat {
        /// The offending text.
        input: String,
    },

    /// The command line was malformed.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Whether this error was caused by invalid command-line input.
    ///
    /// Usage errors are reported before any input is read and map to exit
    /// status 1; everything else is a fatal I/O failure.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Command-line usage errors.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// A token starting with `-` that is not a known flag.
    #[error("invalid option -- '{0}'")]
    InvalidOption(String),

    /// `-d`/`--delimiters` was the last token.
    #[error("option '{0}' requires an argument")]
    MissingDelimiters(String),

    /// `-d`/`--delimiters` was given a value that is not valid UTF-8.
    #[error("delimiter list is not valid UTF-8: '{0}'")]
    InvalidDelimiters(String),

    /// `-d`/`--delimiters` was given an empty string.
    #[error("delimiter list must not be empty")]
    EmptyDelimiters,

    /// A positional argument is not a valid range expression.
    #[error("invalid field range '{range}'")]
    InvalidFieldRange {
        /// The range expression as given.
        range: String,
        /// Why it was rejected.
        #[source]
        source: Box<Error>,
    },
}

/// Result type for fieldcut operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Field positions and the end-of-line bound.
//!
//! Users count fields from 1; internally every position is a 0-based
//! [`FieldIndex`]. The upper bound of a range may also be [`Bound::End`],
//! which has no numeric value until a line has been tokenized:
//!
//! ```text
//! "2:"  on "a b c"      -> 1..=2
//! "2:"  on "a b c d e"  -> 1..=4
//! ```
//!
//! Resolving per line is what lets a single configuration serve lines of
//! any length.

use std::fmt;

use crate::{Error, Result};

/// A 0-based field position.
pub type FieldIndex = usize;

/// Upper bound of a [`FieldRange`](crate::FieldRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// A fixed 0-based field index.
    At(FieldIndex),
    /// The last field of whatever line is being processed.
    End,
}

impl Bound {
    /// Resolve against a line with `field_count` fields.
    ///
    /// Returns `None` for [`Bound::End`] on a line with no fields, since
    /// there is no last field to point at.
    #[must_use]
    pub fn resolve(self, field_count: usize) -> Option<FieldIndex> {
        match self {
            Self::At(index) => Some(index),
            Self::End => field_count.checked_sub(1),
        }
    }

    /// Whether this is the end-of-line sentinel.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }
}

impl From<FieldIndex> for Bound {
    fn from(index: FieldIndex) -> Self {
        Self::At(index)
    }
}

impl fmt::Display for Bound {
    /// Renders the 1-based form a user would type; `End` renders empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(index) => write!(f, "{}", index.saturating_add(1)),
            Self::End => Ok(()),
        }
    }
}

/// Parse a 1-based field number into a 0-based [`FieldIndex`].
///
/// Accepts decimal, or hexadecimal/octal/binary with a `0x`, `0o` or `0b`
/// prefix. Signs are not accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for non-numeric text, values that do
/// not fit a `usize`, and `0` (fields are numbered from 1).
///
/// # Examples
///
/// ```rust
/// use fieldcut::parse_field_specifier;
///
/// assert_eq!(parse_field_specifier("1").unwrap(), 0);
/// assert_eq!(parse_field_specifier("0x10").unwrap(), 15);
/// assert!(parse_field_specifier("0").is_err());
/// ```
pub fn parse_field_specifier(text: &str) -> Result<FieldIndex> {
    let (digits, radix) = split_radix(text);

    // from_str_radix tolerates a leading '+', we don't
    if digits.starts_with(['+', '-']) {
        return Err(Error::invalid_format(text));
    }

    match usize::from_str_radix(digits, radix) {
        Ok(0) | Err(_) => Err(Error::invalid_format(text)),
        Ok(number) => Ok(number - 1),
    }
}

fn split_radix(text: &str) -> (&str, u32) {
    let prefixes = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];

    prefixes
        .iter()
        .find_map(|&(prefix, radix)| text.strip_prefix(prefix).map(|rest| (rest, radix)))
        .unwrap_or((text, 10))
}

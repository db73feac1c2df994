//! Field ranges and the range expression syntax.
//!
//! ## Syntax
//!
//! | Expression | Selects                        | Parsed as          |
//! |------------|--------------------------------|--------------------|
//! | `N`        | field N                        | `{N-1, N-1}`       |
//! | `N:`       | field N through the last field | `{N-1, End}`       |
//! | `:M`       | first field through field M    | `{0, M-1}`         |
//! | `N:M`      | fields N through M             | `{N-1, M-1}`       |
//!
//! Bounds are inclusive. `N:M` with `N > M` is rejected when parsing;
//! `N:` is always accepted, and simply selects nothing on lines with
//! fewer than N fields.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::bound::{parse_field_specifier, Bound, FieldIndex};
use crate::{Error, Result};

/// An inclusive span of fields, `begin..=end`.
///
/// ## Example
///
/// ```rust
/// use fieldcut::{Bound, FieldRange};
///
/// let range: FieldRange = "2:".parse().unwrap();
/// assert_eq!(range.begin(), 1);
/// assert_eq!(range.end(), Bound::End);
///
/// // Resolution happens per line
/// assert_eq!(range.resolve(3), Some(1..=2));
/// assert_eq!(range.resolve(1), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRange {
    begin: FieldIndex,
    end: Bound,
}

impl FieldRange {
    /// Create a range, checking `begin <= end` when `end` is concrete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if `begin` lies after `end`.
    pub fn new(begin: FieldIndex, end: Bound) -> Result<Self> {
        match end {
            Bound::At(end) if begin > end => Err(Error::invalid_format(format!(
                "{}:{}",
                begin.saturating_add(1),
                end.saturating_add(1)
            ))),
            _ => Ok(Self { begin, end }),
        }
    }

    /// A range covering one field.
    #[must_use]
    pub const fn single(index: FieldIndex) -> Self {
        Self {
            begin: index,
            end: Bound::At(index),
        }
    }

    /// The range used when none is given: every field of the line.
    #[must_use]
    pub const fn whole_line() -> Self {
        Self {
            begin: 0,
            end: Bound::End,
        }
    }

    /// First selected index (0-based).
    #[must_use]
    pub const fn begin(&self) -> FieldIndex {
        self.begin
    }

    /// Last selected index, possibly the end-of-line sentinel.
    #[must_use]
    pub const fn end(&self) -> Bound {
        self.end
    }

    /// The in-bounds indices this range selects on a line of
    /// `field_count` fields, or `None` if it selects nothing there.
    ///
    /// Indices past the last field are dropped rather than reported.
    #[must_use]
    pub fn resolve(&self, field_count: usize) -> Option<RangeInclusive<FieldIndex>> {
        let last = field_count.checked_sub(1)?;
        let end = self.end.resolve(field_count)?.min(last);
        (self.begin <= end).then_some(self.begin..=end)
    }
}

impl Default for FieldRange {
    fn default() -> Self {
        Self::whole_line()
    }
}

/// Parse a range expression (`N`, `N:`, `:M` or `N:M`).
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] on malformed field numbers, `0`, more
/// than one `:`, or a concrete end before the begin.
pub fn parse_field_range(text: &str) -> Result<FieldRange> {
    let Some((begin, end)) = text.split_once(':') else {
        return parse_field_specifier(text).map(FieldRange::single);
    };

    if end.contains(':') {
        return Err(Error::invalid_format(text));
    }

    let begin = if begin.is_empty() {
        0
    } else {
        parse_field_specifier(begin)?
    };
    let end = if end.is_empty() {
        Bound::End
    } else {
        parse_field_specifier(end).map(Bound::from)?
    };

    FieldRange::new(begin, end).map_err(|_| Error::invalid_format(text))
}

impl FromStr for FieldRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_field_range(s)
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Bound::At(end) if end == self.begin => write!(f, "{}", self.begin.saturating_add(1)),
            end => write!(f, "{}:{}", self.begin.saturating_add(1), end),
        }
    }
}

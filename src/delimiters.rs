//! Delimiter sets and line tokenization.
//!
//! Every character in the set is an independent separator, and any run of
//! them counts as one:
//!
//! ```text
//! delimiters = " \t"
//!
//! "a  b\tc"     -> ["a", "b", "c"]
//! "  a b  "     -> ["a", "b"]       <- no empty leading/trailing fields
//! "   "         -> []
//! ```
//!
//! Fields are recorded as byte spans into the line so the span buffer can
//! be reused from one line to the next without borrowing the line itself.

use std::ops::Range;

use crate::error::UsageError;
use crate::Result;

/// The characters that separate fields.
///
/// ## Example
///
/// ```rust
/// use fieldcut::Delimiters;
///
/// let delims = Delimiters::new(",;").unwrap();
/// let fields: Vec<&str> = delims.fields("a,,b;c").collect();
/// assert_eq!(fields, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    chars: Vec<char>,
    // UTF-8 encoding of each char, for matching against raw input bytes
    encoded: Vec<Box<[u8]>>,
}

impl Delimiters {
    /// Build a set from the characters of `chars`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::EmptyDelimiters`] if `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(UsageError::EmptyDelimiters.into());
        }

        let mut set: Vec<char> = chars.chars().collect();
        set.sort_unstable();
        set.dedup();
        Ok(Self::from_sorted(set))
    }

    fn from_sorted(chars: Vec<char>) -> Self {
        let encoded: Vec<Box<[u8]>> = chars
            .iter()
            .map(|c| Box::from(c.encode_utf8(&mut [0; 4]).as_bytes()))
            .collect();
        Self { chars, encoded }
    }

    /// Whether `c` separates fields.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        // Sets are tiny; a scan beats hashing
        self.chars.contains(&c)
    }

    /// The distinct delimiter characters, sorted.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in bytes of the delimiter `bytes` starts with, if any.
    fn match_len(&self, bytes: &[u8]) -> Option<usize> {
        self.encoded
            .iter()
            .find(|encoding| bytes.starts_with(encoding))
            .map(|encoding| encoding.len())
    }

    /// Split `line` into fields, replacing the contents of `spans` with
    /// the byte range of each field in order.
    ///
    /// `line` need not be valid UTF-8. Delimiters are matched by their
    /// UTF-8 encoding, and every other byte is field data. On valid UTF-8
    /// the spans always fall on char boundaries.
    pub fn split_into(&self, line: &[u8], spans: &mut Vec<Range<usize>>) {
        spans.clear();

        let mut start = None;
        let mut offset = 0;
        while offset < line.len() {
            match self.match_len(&line[offset..]) {
                Some(len) => {
                    if let Some(begin) = start.take() {
                        spans.push(begin..offset);
                    }
                    offset += len;
                }
                None => {
                    if start.is_none() {
                        start = Some(offset);
                    }
                    offset += 1;
                }
            }
        }

        if let Some(begin) = start {
            spans.push(begin..line.len());
        }
    }

    /// Iterate over the fields of `line`.
    pub fn fields<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        line.split(|c: char| self.contains(c)).filter(|field| !field.is_empty())
    }
}

impl Default for Delimiters {
    /// Space and tab.
    fn default() -> Self {
        Self::from_sorted(vec!['\t', ' '])
    }
}

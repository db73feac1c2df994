//! # fieldcut
//!
//! Pick fields out of lines of text.
//!
//! ## The Problem
//!
//! `cut -d' '` treats every delimiter character as its own separator, so
//! columns aligned with runs of spaces turn into a mess of empty fields:
//!
//! ```text
//! $ printf 'alice   42\nbob     7\n' | cut -d' ' -f2
//! (empty)
//! (empty)
//! ```
//!
//! fieldcut splits the way whitespace splitting does: any run of delimiter
//! characters is a single separator, and leading or trailing delimiters
//! produce no empty fields.
//!
//! ```text
//! $ printf 'alice   42\nbob     7\n' | fieldcut 2
//! 42
//! 7
//! ```
//!
//! ## Ranges
//!
//! Fields are numbered from 1. Bounds are inclusive.
//!
//! | Expression | Selects                        |
//! |------------|--------------------------------|
//! | `N`        | field N                        |
//! | `N:`       | field N through the last field |
//! | `:M`       | first field through field M    |
//! | `N:M`      | fields N through M             |
//!
//! Ranges are emitted in the order given, each in ascending field order,
//! so `fieldcut 3 1:2` moves the third column to the front. Positions past
//! the end of a line are skipped silently.
//!
//! ## Output
//!
//! Each selected field is written followed by one space, and each line
//! ends with `\n`. Processing stops at end of input or at the first empty
//! line. A line made only of delimiters is not empty: it yields an empty
//! output line and processing continues.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcut::{Config, Delimiters, Selector};
//!
//! let config = Config::new(
//!     Delimiters::new(":").unwrap(),
//!     vec!["1".parse().unwrap(), "6:".parse().unwrap()],
//! );
//! let selector = Selector::new(config);
//!
//! assert_eq!(
//!     selector.select_to_string("root:x:0:0:root:/root:/bin/sh"),
//!     "root /root /bin/sh \n"
//! );
//! ```

mod bound;
mod config;
mod delimiters;
mod error;
mod range;
mod selector;

pub use bound::{parse_field_specifier, Bound, FieldIndex};
pub use config::{help_text, usage_hint, Command, Config};
pub use delimiters::Delimiters;
pub use error::{Error, Result, UsageError};
pub use range::{parse_field_range, FieldRange};
pub use selector::{Selector, Summary, Termination};

//! Selecting Columns
//!
//! Pull columns out of space-aligned text, the way `ps` or `ls -l` print it.
//!
//! ```bash
//! cargo run --example select_columns
//! ```

use fieldcut::{parse_field_range, Config, Delimiters, Selector};

fn main() {
    let listing = "\
PID   TTY      TIME      CMD
1     ?        00:00:03  init
412   pts/0    00:00:00  bash
9001  pts/0    00:00:12  cargo build --release
";

    // Command first, then the PID; "4:" keeps multi-word commands whole
    let ranges = ["4:", "1"]
        .iter()
        .map(|text| parse_field_range(text))
        .collect::<Result<Vec<_>, _>>()
        .expect("ranges are valid");

    for range in &ranges {
        println!("range {range} -> begin {}, end {:?}", range.begin(), range.end());
    }
    println!();

    let selector = Selector::new(Config::new(Delimiters::default(), ranges));
    let mut out = Vec::new();
    let summary = selector
        .run(listing.as_bytes(), &mut out)
        .expect("in-memory i/o");

    print!("{}", String::from_utf8_lossy(&out));
    println!("\n{} lines in, {} lines out", summary.lines_read, summary.lines_written);
}

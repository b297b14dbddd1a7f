// file: src/parser/patterns.rs
// description: compiled regex patterns for the log line grammar
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `YYYY-MM-DD HH:MM:SS`, ASCII digits only, no other widths
    pub static ref TIMESTAMP: Regex = Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$"
    ).expect("TIMESTAMP regex is valid");
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches one or more consecutive whitespace characters
    /// - "Central  Bin" -> one match ("  ")
    /// - "Metro\tPlaza Restroom" -> two matches
    pub static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse every run of whitespace in `value` into a single hyphen.
pub fn hyphenate_whitespace(value: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(value, "-").into_owned()
}

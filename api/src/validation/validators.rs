//! Field predicates backing the registration rule tables

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Email syntax: non-empty local part, '@', domain with at least one dot
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Check email syntax against the compiled pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Minimum character count (Unicode scalar values, not bytes)
pub fn meets_min_len(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

//! Value transforms
//!
//! Field values are rendered as text with fixed rules so that output matches
//! other implementations byte for byte:
//! - booleans as the tokens `true` / `false`
//! - timestamps as `YYYY-MM-DD HH:MM:SS UTC`
//! - tag lists as `#`-prefixed words joined by single spaces, in list order

use std::fmt::Write;

use chrono::{DateTime, Utc};

/// Timestamp pattern used on the wire
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub const TRUE_TOKEN: &str = "true";
pub const FALSE_TOKEN: &str = "false";

#[inline]
pub fn bool_token(value: bool) -> &'static str {
    if value {
        TRUE_TOKEN
    } else {
        FALSE_TOKEN
    }
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Join tags as `#a #b #c`
pub fn tag_string<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for tag in tags {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(out, "#{}", tag.as_ref());
    }
    out
}

//! Date display helpers

use chrono::NaiveDateTime;

/// Shown in place of a date that is missing or failed to parse
pub const UNDATED: &str = "undated";

/// Format a post date with a chrono format string
///
/// # Examples
/// ```ignore
/// format_date(post.date.as_ref(), "%Y-%m-%d") // -> "2024-01-15"
/// ```
pub fn format_date(date: Option<&NaiveDateTime>, format: &str) -> String {
    date.map(|d| d.format(format).to_string())
        .unwrap_or_else(|| UNDATED.to_string())
}

/// Short ISO form, e.g. "2024-01-15"
pub fn short_date(date: Option<&NaiveDateTime>) -> String {
    format_date(date, "%Y-%m-%d")
}

/// Long form used on post pages, e.g. "January 15, 2024"
pub fn full_date(date: Option<&NaiveDateTime>) -> String {
    format_date(date, "%B %-d, %Y")
}

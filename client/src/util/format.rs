//! Display formatting for dates, money, and optional fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for absent values.
pub const MISSING: &str = "-";

/// Format an API timestamp as `DD Mon YYYY` (e.g. `05 Mar 2025`).
///
/// Accepts RFC 3339, offset-less ISO date-times, and bare `YYYY-MM-DD`.
/// Absent or unparseable input yields [`MISSING`].
pub fn format_date(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse_date)
        .map_or_else(|| MISSING.to_owned(), |date| date.format("%d %b %Y").to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format an amount as whole rupiah: `Rp 150.000`.
///
/// Negative and non-finite amounts render as `Rp 0`.
pub fn format_rupiah(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 { amount.round() } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount as u64;
    format!("Rp {}", group_thousands(whole))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `Yes` / `No` for boolean flags.
pub fn format_flag(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// The trimmed text, or [`MISSING`] when absent or blank.
pub fn text_or_missing(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| MISSING.to_owned(), str::to_owned)
}

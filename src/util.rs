// Utility helpers for parsing and formatting.
//
// This module centralizes all the "dirty" CSV/number/date handling so the
// rest of the code can assume clean, typed values.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in CSV exports (commas, spaces, text).
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters.
/// - Strips thousands separators like `","` before parsing.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(",", "");
    s.parse::<f64>().ok()
}

pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    // TMDB-style exports use `YYYY-MM-DD`; spreadsheet re-exports sometimes
    // flip to `MM/DD/YYYY`, so try that as a fallback.
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Split a raw genre field on commas, trimming each label and dropping
/// empties. A missing field yields an empty list.
pub fn split_genres(s: Option<&str>) -> Vec<String> {
    match s {
        Some(s) => s
            .split(',')
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(|g| g.to_string())
            .collect(),
        None => Vec::new(),
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Format a floating-point value with:
    // - a fixed number of decimal places, and
    // - locale-aware thousands separators (e.g., `1,234,567.89`).
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Use `num-format` to insert commas into the integer portion.
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Render an optional amount, keeping "unknown" visually distinct from zero.
pub fn format_amount(n: Option<f64>, decimals: usize) -> String {
    match n {
        Some(v) => format_number(v, decimals),
        None => "-".to_string(),
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values, used for
    // counts in console messages (e.g., `4,803 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_safe_handles_messy_input() {
        assert_eq!(parse_f64_safe(Some("1,500000")), Some(1500000.0));
        assert_eq!(parse_f64_safe(Some("  42.5 ")), Some(42.5));
        assert_eq!(parse_f64_safe(Some("n/a")), None);
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn parse_date_safe_accepts_both_formats() {
        let d = NaiveDate::from_ymd_opt(2009, 12, 10).unwrap();
        assert_eq!(parse_date_safe(Some("2009-12-10")), Some(d));
        assert_eq!(parse_date_safe(Some("12/10/2009")), Some(d));
        assert_eq!(parse_date_safe(Some("soon")), None);
        assert_eq!(parse_date_safe(Some("")), None);
    }

    #[test]
    fn split_genres_trims_and_drops_empties() {
        assert_eq!(
            split_genres(Some("Action, Science Fiction ,Adventure")),
            vec!["Action", "Science Fiction", "Adventure"]
        );
        assert_eq!(split_genres(Some("  ,")), Vec::<String>::new());
        assert_eq!(split_genres(None), Vec::<String>::new());
    }

    #[test]
    fn format_amount_distinguishes_unknown_from_zero() {
        assert_eq!(format_amount(Some(0.0), 2), "0.00");
        assert_eq!(format_amount(Some(1234567.0), 2), "1,234,567.00");
        assert_eq!(format_amount(None, 2), "-");
    }
}

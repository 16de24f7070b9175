//! # Bill Date Formatting
//!
//! Renders `YYYY-MM-DD` as `YYYY年M月D日` (month and day without leading
//! zeros).
//!
//! ```rust
//! use billsplit_core::config::DateConfig;
//! use billsplit_core::date::format_bill_date;
//!
//! let date = format_bill_date("2024-03-21", &DateConfig::default()).unwrap();
//! assert_eq!(date, "2024年3月21日");
//! ```

use chrono::NaiveDate;

use crate::config::{DateConfig, DateMode};
use crate::error::{SplitError, SplitResult};

/// Placeholder for a month or day that cannot be salvaged in lenient mode.
const UNKNOWN_COMPONENT: &str = "?";

/// Formats a bill date according to the configured mode.
pub fn format_bill_date(input: &str, config: &DateConfig) -> SplitResult<String> {
    match config.mode {
        DateMode::Strict => format_strict(input, config.check_calendar),
        DateMode::Lenient => Ok(format_lenient(input)),
    }
}

fn format_strict(input: &str, check_calendar: bool) -> SplitResult<String> {
    let invalid = |reason: &str| SplitError::InvalidDateFormat {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = input.trim().split('-').collect();
    let &[year, month, day] = parts.as_slice() else {
        return Err(invalid("expected YYYY-MM-DD"));
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(year) || !is_digits(month) || !is_digits(day) {
        return Err(invalid("year, month and day must be digits"));
    }

    let month_num: u32 = month.parse().map_err(|_| invalid("month out of range"))?;
    let day_num: u32 = day.parse().map_err(|_| invalid("day out of range"))?;

    if check_calendar {
        let year_num: i32 = year.parse().map_err(|_| invalid("year out of range"))?;
        if NaiveDate::from_ymd_opt(year_num, month_num, day_num).is_none() {
            return Err(invalid("not a calendar date"));
        }
    }

    // The year keeps its digits as written; only month and day drop zeros.
    Ok(format!("{}年{}月{}日", year, month_num, day_num))
}

fn format_lenient(input: &str) -> String {
    let mut parts = input.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().and_then(leading_integer);
    let day = parts.next().and_then(leading_integer);

    let render = |value: Option<i64>| match value {
        Some(n) => n.to_string(),
        None => UNKNOWN_COMPONENT.to_string(),
    };

    format!("{}年{}月{}日", year, render(month), render(day))
}

/// Parses the integer prefix of `s` (optional sign, then digits).
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

// =============================================================================
// Unit Tests
// =============================================================================

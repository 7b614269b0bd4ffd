//! Validation and parsing utilities for form input
//!
//! Raw form text is only parsed here, at submission time.

use chrono::{Datelike, NaiveDate};

/// Year the forecast model covers
pub const FORECAST_YEAR: i32 = 2026;

// ============================================================================
// Numeric Input
// ============================================================================

/// Parse a raw numeric field. Surrounding whitespace is ignored.
///
/// Returns `None` for empty, non-numeric, or non-finite input (`NaN`, `inf`).
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a comma-delimited list of numbers such as `25.3,26.1,26.8`.
///
/// Empty tokens (a trailing comma, `1,,2`) are skipped. Any other token that
/// does not parse fails the whole list.
pub fn parse_numeric_list(raw: &str) -> Result<Vec<f64>, &'static str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_numeric(token).ok_or("List contains a non-numeric value"))
        .collect()
}

/// Longest forecast horizon the list page accepts, in days
pub const MAX_HORIZON: u32 = 365;

/// Parse a forecast horizon: a whole number of days, 1 to [`MAX_HORIZON`]
pub fn parse_horizon(raw: &str) -> Result<u32, &'static str> {
    let value = parse_numeric(raw).ok_or("Horizon must be a number")?;
    if value.fract() != 0.0 {
        return Err("Horizon must be a whole number of days");
    }
    if value < 1.0 {
        return Err("Horizon must be at least one day");
    }
    if value > MAX_HORIZON as f64 {
        return Err("Horizon must be at most 365 days");
    }
    Ok(value as u32)
}

/// Parse a boolean select token (`true` / `false`, any case)
pub fn parse_bool_token(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Forecast Dates
// ============================================================================

/// Validate that a forecast start date falls within the forecast year
pub fn validate_forecast_start_date(date: NaiveDate) -> Result<(), &'static str> {
    if date.year() != FORECAST_YEAR {
        return Err("Please choose a date within the year 2026.");
    }
    Ok(())
}

/// Default start date: today's month and day, moved into the forecast year.
/// Feb 29 maps to Feb 28.
pub fn default_forecast_start_date(today: NaiveDate) -> NaiveDate {
    today
        .with_year(FORECAST_YEAR)
        .or_else(|| NaiveDate::from_ymd_opt(FORECAST_YEAR, today.month(), 28))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse an ISO `YYYY-MM-DD` date as submitted by a date input
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| "Invalid date format")
}

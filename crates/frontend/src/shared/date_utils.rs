//! Date display helpers. The backend sends ISO strings, sometimes with a
//! time part, fractional seconds or a `Z` suffix.

use chrono::{NaiveDate, NaiveDateTime};

const PLACEHOLDER: &str = "—";

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches('Z');
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split(['T', ' ']).next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `"2024-03-15T14:02:26.123Z"` -> `"15.03.2024 14:02"`
pub fn format_datetime(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => format_date(value),
    }
}

/// `"2024-03-15"` or `"2024-03-15T14:02:26Z"` -> `"15.03.2024"`
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(d) => d.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

pub fn format_date_opt(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(format_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_datetime_opt(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Value for an `<input type="date">` from a `YYYY-MM-DD` filter field.
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Today in the browser's local time, as `YYYY-MM-DD`.
pub fn today_input_value() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_variants() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31.12.2024 23:59");
        assert_eq!(format_datetime("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn date_variants() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(format_date_opt(None), "—");
        assert_eq!(format_date_opt(Some(" ")), "—");
        assert_eq!(format_datetime_opt(Some("2024-01-02T03:04:05")), "02.01.2024 03:04");
    }

    #[test]
    fn input_value_round_trip() {
        let d = from_input_value("2024-02-29");
        assert_eq!(to_input_value(d), "2024-02-29");
        assert_eq!(from_input_value(""), None);
        assert_eq!(to_input_value(None), "");
    }
}

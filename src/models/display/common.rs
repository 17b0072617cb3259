//! Common display helpers

use chrono::NaiveDate;

/// US-style date as shown throughout the dashboard
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Value or "--" when absent or blank
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(d), "01/05/2025");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("ibuprofen")), "ibuprofen");
        assert_eq!(or_dash(Some("  ")), "--");
        assert_eq!(or_dash(None), "--");
    }
}

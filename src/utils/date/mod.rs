// Date utility functions

use chrono::{DateTime, Local, NaiveDate, Timelike};

/// Hour of day with minutes as a fraction (`hour + minute / 60`).
pub fn fractional_hour(time: &DateTime<Local>) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

/// Format a date in short form based on the date format setting
/// ("DD/MM/YYYY", "MM/DD/YYYY" or "YYYY/MM/DD").
pub fn format_short_date(date: NaiveDate, date_format: &str) -> String {
    if date_format.starts_with("DD/MM") || date_format.starts_with("dd/mm") {
        date.format("%d/%m").to_string()
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        date.format("%Y/%m/%d").to_string()
    } else {
        date.format("%m/%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fractional_hour() {
        let time = Local.with_ymd_and_hms(2025, 3, 10, 9, 45, 30).unwrap();
        assert_eq!(fractional_hour(&time), 9.75);
    }

    #[test]
    fn test_format_short_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
        assert_eq!(format_short_date(date, "MM/DD/YYYY"), "12/04");
        assert_eq!(format_short_date(date, "DD/MM/YYYY"), "04/12");
        assert_eq!(format_short_date(date, "YYYY/MM/DD"), "2024/12/04");
    }
}

//! Date display and due-date arithmetic.

use chrono::{Datelike, NaiveDate};

/// Fewer days than this until the next verification flags it as due soon.
pub const VERIFICATION_WARNING_DAYS: i64 = 30;

/// "March 15, 2023"
pub fn format_long(date: impl Datelike) -> String {
    let d = as_naive(date);
    d.format("%B %-d, %Y").to_string()
}

/// "Mar 15, 2023"
pub fn format_short(date: impl Datelike) -> String {
    let d = as_naive(date);
    d.format("%b %-d, %Y").to_string()
}

fn as_naive(date: impl Datelike) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), date.day()).unwrap_or_default()
}

/// Whole days from `today` until `due`; negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

pub fn verification_due_soon(days: i64) -> bool {
    days < VERIFICATION_WARNING_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_formats() {
        assert_eq!(format_long(d(2023, 3, 5)), "March 5, 2023");
        assert_eq!(format_short(d(2023, 6, 15)), "Jun 15, 2023");

        let ts = NaiveDateTime::parse_from_str("2023-03-15 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_long(ts), "March 15, 2023");
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(d(2023, 6, 15), d(2023, 6, 1)), 14);
        assert_eq!(days_until(d(2023, 6, 15), d(2023, 6, 15)), 0);
        assert_eq!(days_until(d(2023, 6, 15), d(2023, 7, 15)), -30);
    }

    #[test]
    fn test_due_soon_boundary() {
        assert!(verification_due_soon(29));
        assert!(!verification_due_soon(30));
        assert!(verification_due_soon(-400));
    }
}

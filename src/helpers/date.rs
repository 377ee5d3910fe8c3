//! Date helper functions

use chrono::{DateTime, Local, NaiveDate};

/// Format a post date for display
///
/// # Examples
/// ```ignore
/// long_date(&date) // -> "January 15, 2024"
/// ```
pub fn long_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a comment date relative to `now`: "Just now" under an hour,
/// "N hour(s) ago" under a day, a short date with time otherwise.
pub fn comment_date(date: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let hours = now.signed_duration_since(*date).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    } else {
        date.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(long_date(&date), "January 15, 2024");
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(long_date(&date), "November 3, 2025");
    }

    #[test]
    fn test_comment_date_just_now() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let date = now - Duration::minutes(30);
        assert_eq!(comment_date(&date, &now), "Just now");
    }

    #[test]
    fn test_comment_date_hours_ago() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(comment_date(&(now - Duration::hours(1)), &now), "1 hour ago");
        assert_eq!(comment_date(&(now - Duration::hours(5)), &now), "5 hours ago");
    }

    #[test]
    fn test_comment_date_older() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let date = Local.with_ymd_and_hms(2024, 1, 5, 15, 24, 0).unwrap();
        assert_eq!(comment_date(&date, &now), "Jan 5, 2024, 03:24 PM");
    }
}

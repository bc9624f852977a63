// src/utils/time.rs

use chrono::{DateTime, Utc};

/// Current time as epoch milliseconds, the format submissions are stamped with.
pub fn now_epoch_millis() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Human-readable form used in result notifications.
pub fn display_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d %b %Y, %I:%M %p UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_datetime() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(display_datetime(&t), "05 Mar 2024, 02:30 PM UTC");
    }

    #[test]
    fn test_now_epoch_millis_is_numeric() {
        let now = now_epoch_millis();
        assert!(now.parse::<i64>().unwrap() > 0);
    }
}

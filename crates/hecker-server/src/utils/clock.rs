use chrono::{DateTime, Local, TimeZone};

/// 12-hour wall clock used by the chat UI, e.g. "09:05 PM"
pub const DISPLAY_FORMAT: &str = "%I:%M %p";

pub fn display_time() -> String {
    format_display(&Local::now())
}

pub fn format_display<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_display() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(format_display(&morning), "09:05 AM");

        let evening = Utc.with_ymd_and_hms(2024, 3, 1, 21, 45, 0).unwrap();
        assert_eq!(format_display(&evening), "09:45 PM");
    }

    #[test]
    fn test_display_time_shape() {
        let now = display_time();
        assert_eq!(now.len(), 8);
        assert!(now.ends_with("AM") || now.ends_with("PM"));
    }
}

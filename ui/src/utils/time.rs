use jiff::{Timestamp, Zoned, tz::TimeZone};

/// When an agent last reported in, in the browser's timezone.
pub fn format_last_seen(last_seen_at: Option<Timestamp>) -> String {
    match last_seen_at {
        Some(timestamp) => {
            format_zoned_timestamp(&timestamp.to_zoned(TimeZone::system()))
        }
        None => "Never".to_string(),
    }
}

pub fn format_zoned_timestamp(zoned: &Zoned) -> String {
    zoned.strftime("%a, %d %b %Y %H:%M %Z").to_string()
}

use jiff::{Timestamp, tz};

/// Format a timestamp in the viewer's timezone for display on cards.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    let zoned = timestamp.to_zoned(tz::TimeZone::system());
    zoned.strftime("%b %d, %Y %H:%M").to_string()
}

use chrono::{DateTime, Utc};

/// Bucket the time elapsed since `timestamp` into a short label.
///
/// Under a minute is "Just now", then whole minutes, hours and days.
/// Timestamps in the future (clock skew) also read "Just now".
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

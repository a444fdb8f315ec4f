use std::time::Duration;

/// Format a duration as `m:ss` (minutes unpadded, seconds zero-padded).
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

//! Human-readable time formatting

use std::time::Duration;

/// Format a remaining-time counter as `{m}分{ss}秒`, seconds zero-padded
pub fn format_remaining(seconds: u32) -> String {
    format!("{}分{:02}秒", seconds / 60, seconds % 60)
}

/// Format an elapsed duration as a compact uptime string
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

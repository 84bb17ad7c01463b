//! `HH:MM:SS` formatting for the countdown display.

/// Format seconds as `HH:MM:SS`. Hours keep growing past 99.
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Parse an `HH:MM:SS` display back into seconds.
pub fn parse_clock(display: &str) -> Option<u64> {
    let mut parts = display.trim().split(':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let secs: u64 = parts.next()?.parse().ok()?;

    if parts.next().is_some() || minutes >= 60 || secs >= 60 {
        return None;
    }

    hours.checked_mul(3600)?.checked_add(minutes * 60 + secs)
}

//! Duration labels for the time axis.

/// Format whole seconds as zero-padded `HH:MM`. Hours are not capped (`100:00`).
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds - hours * 3600) / 60;
    format!("{:02}:{:02}", hours, minutes)
}

/// Tick formatter for the duration axis: truncates the tick value to whole seconds.
pub fn format_tick(value: f64) -> String {
    let secs = if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    };
    format_hms(secs)
}

//! Time formatting utilities

/// Format seconds for engine arguments: `90`, `125.5`, `0.25`.
///
/// Millisecond precision; trailing zeros are dropped.
pub fn format_seconds(seconds: f64) -> String {
    let formatted = format!("{:.3}", seconds);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format seconds as `HH:MM:SS`, with `.mmm` only when there is a fraction
pub fn format_hms(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;

    if millis > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_engine_seconds() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(90.0), "90");
        assert_eq!(format_seconds(125.5), "125.5");
        assert_eq!(format_seconds(0.1 + 0.2), "0.3");
        assert_eq!(format_seconds(59.9999), "60");
    }

    #[test]
    fn formats_clock_time() {
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(125.5), "00:02:05.500");
        assert_eq!(format_hms(3723.0), "01:02:03");
        assert_eq!(format_hms(-3.0), "00:00:00");
    }
}

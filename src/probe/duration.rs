//! Duration extraction from transcoding-engine diagnostic output

use regex::Regex;
use std::sync::LazyLock;

use crate::probe::DurationProbe;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Duration:\s*(\d+):(\d+):(\d+\.\d+)").expect("invalid duration regex")
});

/// Parse the total duration out of engine diagnostic text.
///
/// Only the first `Duration: HH:MM:SS.fraction` occurrence counts; later
/// per-stream lines are ignored. Text without a match (or with unparsable
/// fields) yields [`DurationProbe::Unknown`] rather than an error.
pub fn parse_duration(output: &str) -> DurationProbe {
    let Some(caps) = DURATION_RE.captures(output) else {
        return DurationProbe::Unknown;
    };

    let hours = caps[1].parse::<f64>();
    let minutes = caps[2].parse::<f64>();
    let seconds = caps[3].parse::<f64>();

    match (hours, minutes, seconds) {
        (Ok(h), Ok(m), Ok(s)) => {
            let total = h * 3600.0 + m * 60.0 + s;
            if total.is_finite() && total > 0.0 {
                DurationProbe::Known(total)
            } else {
                DurationProbe::Unknown
            }
        }
        _ => DurationProbe::Unknown,
    }
}

/// Duration in seconds, `0.0` when unknown
pub fn parse_duration_seconds(output: &str) -> f64 {
    parse_duration(output).seconds()
}

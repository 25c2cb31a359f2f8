//! Media duration probing module

use serde::{Deserialize, Serialize};

pub mod duration;
pub mod inspector;

pub use duration::{parse_duration, parse_duration_seconds};
pub use inspector::VideoInspector;

/// Outcome of scanning engine output for the total duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationProbe {
    /// Total duration in seconds, always positive
    Known(f64),
    /// No duration line found; planning must not proceed
    Unknown,
}

impl DurationProbe {
    /// Duration in seconds, `0.0` when unknown
    pub fn seconds(&self) -> f64 {
        match self {
            DurationProbe::Known(seconds) => *seconds,
            DurationProbe::Unknown => 0.0,
        }
    }
}

/// What the splitter needs to know about a source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    /// File path
    pub path: String,
    /// Duration in seconds
    pub duration: f64,
    /// File size in bytes
    pub file_size: u64,
}

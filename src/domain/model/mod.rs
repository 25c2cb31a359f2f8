// Domain models - Core types and data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Title used when the caller supplies none
pub const DEFAULT_TITLE: &str = "Video";

/// Time specification parsed from an `HH:MM:SS` string
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeSpec {
    pub seconds: f64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Create a new TimeSpec from hours, minutes and seconds
    pub fn from_components(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            seconds: hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64,
        }
    }

    /// Parse a strict `HH:MM:SS` string where every field is an unsigned integer
    pub fn parse(time_str: &str) -> Result<Self, DomainError> {
        let trimmed = time_str.trim();
        let invalid = || DomainError::InvalidTimeFormat(time_str.to_string());

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            // u32::from_str accepts a leading '+', which is not a valid clock field
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse::<u32>().map_err(|_| invalid())?;
        }

        let [hours, minutes, seconds] = fields;
        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }

        Ok(Self::from_components(hours, minutes, seconds))
    }

    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::utils::time::format_hms(self.seconds))
    }
}

/// Half-open interval `[start, end)` on the source timeline, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    /// Create a validated range: `start >= 0` and `end > start`
    pub fn new(start: f64, end: f64) -> Result<Self, DomainError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DomainError::InvalidTimeRange(
                "Range bounds must be finite".to_string(),
            ));
        }
        if start < 0.0 {
            return Err(DomainError::InvalidTimeRange(format!(
                "start ({}) cannot be negative",
                start
            )));
        }
        if end <= start {
            return Err(DomainError::InvalidTimeRange(format!(
                "start ({}) must be less than end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the range in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `t` falls inside `[start, end)`
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            crate::utils::time::format_seconds(self.start),
            crate::utils::time::format_seconds(self.end)
        )
    }
}

/// Portion of the source excluded from every output segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutOutRange {
    range: TimeRange,
}

impl CutOutRange {
    pub fn new(range: TimeRange) -> Self {
        Self { range }
    }

    /// Build a cut-out range from two `HH:MM:SS` strings
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        let start = TimeSpec::parse(start)?;
        let end = TimeSpec::parse(end)?;
        let range = TimeRange::new(start.as_seconds(), end.as_seconds())?;
        Ok(Self::new(range))
    }

    pub fn start(&self) -> f64 {
        self.range.start
    }

    pub fn end(&self) -> f64 {
        self.range.end
    }

    /// A window start is advanced when it lies in `[start, end)`
    pub fn captures_start(&self, t: f64) -> bool {
        self.range.start <= t && t < self.range.end
    }

    /// A window end is retracted when it lies in `(start, end]`
    pub fn captures_end(&self, t: f64) -> bool {
        self.range.start < t && t <= self.range.end
    }
}

impl fmt::Display for CutOutRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            TimeSpec::from_seconds(self.range.start),
            TimeSpec::from_seconds(self.range.end)
        )
    }
}

/// Segment length in whole seconds, bounded to `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentLength(u32);

impl SegmentLength {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 600;

    pub fn new(seconds: u32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&seconds) {
            return Err(DomainError::InvalidSegmentLength(seconds));
        }
        Ok(Self(seconds))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_seconds(&self) -> f64 {
        self.0 as f64
    }
}

/// Output framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectMode {
    /// 9:16, cropped from the source frame
    #[serde(rename = "9:16")]
    Portrait,
    /// 16:9, source framing kept
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectMode {
    /// Parse the aspect selector; only the exact strings `9:16` and `16:9` are accepted
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim() {
            "9:16" => Ok(AspectMode::Portrait),
            "16:9" => Ok(AspectMode::Landscape),
            other => Err(DomainError::InvalidAspect(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectMode::Portrait => "9:16",
            AspectMode::Landscape => "16:9",
        }
    }
}

impl fmt::Display for AspectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated user parameters for one planning run
#[derive(Debug, Clone, PartialEq)]
pub struct PlanParameters {
    pub segment_length: SegmentLength,
    pub aspect: AspectMode,
    pub cut_out: Option<CutOutRange>,
    pub title_base: String,
}

impl PlanParameters {
    pub fn new(
        segment_length: SegmentLength,
        aspect: AspectMode,
        cut_out: Option<CutOutRange>,
        title_base: Option<&str>,
    ) -> Self {
        let title_base = match title_base.map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };

        Self {
            segment_length,
            aspect,
            cut_out,
            title_base,
        }
    }

    /// Validate raw front-end input; every check runs before any planning work
    pub fn parse(
        segment_length: u32,
        aspect: &str,
        title_base: Option<&str>,
        cut_start: Option<&str>,
        cut_end: Option<&str>,
    ) -> Result<Self, DomainError> {
        let segment_length = SegmentLength::new(segment_length)?;
        let aspect = AspectMode::parse(aspect)?;

        let cut_out = match (cut_start, cut_end) {
            (Some(start), Some(end)) => Some(CutOutRange::parse(start, end)?),
            (None, None) => None,
            _ => {
                return Err(DomainError::BadArgs(
                    "Cut-out needs both a start and an end time".to_string(),
                ))
            }
        };

        Ok(Self::new(segment_length, aspect, cut_out, title_base))
    }
}

/// One output segment, ready to be handed to the transcoding engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPlan {
    /// 1-based position among emitted segments
    pub index: u32,
    /// 1-based position of the fixed-length window this segment came from
    pub window_index: u32,
    pub range: TimeRange,
    pub label: String,
    pub title: String,
    pub filter_chain: String,
}

impl SegmentPlan {
    /// Label as used in output file names: `Part One` becomes `Part_One`
    pub fn file_label(&self) -> String {
        self.label.replace(' ', "_")
    }
}

// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Malformed `HH:MM:SS` time string
    InvalidTimeFormat(String),
    /// Invalid time range
    InvalidTimeRange(String),
    /// Segment length outside the accepted bounds
    InvalidSegmentLength(u32),
    /// Aspect selector other than `9:16` or `16:9`
    InvalidAspect(String),
    /// Engine output carried no usable duration
    DurationUnknown(String),
    /// File not found
    FileNotFound(String),
    /// The external engine could not be started or exited with failure
    ExternalToolFailed(String),
    /// Duration and segment length give more parts than one run may produce
    TooManySegments(u64),
}

impl DomainError {
    /// Whether the error stems from user input rather than from the media or the engine
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::BadArgs(_)
                | DomainError::InvalidTimeFormat(_)
                | DomainError::InvalidTimeRange(_)
                | DomainError::InvalidSegmentLength(_)
                | DomainError::InvalidAspect(_)
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::InvalidTimeFormat(time) => {
                write!(f, "Invalid time format: '{}'. Expected HH:MM:SS", time)
            }
            DomainError::InvalidTimeRange(msg) => write!(f, "Invalid time range: {}", msg),
            DomainError::InvalidSegmentLength(len) => write!(
                f,
                "Invalid segment length: {} seconds (must be between {} and {})",
                len,
                crate::domain::model::SegmentLength::MIN,
                crate::domain::model::SegmentLength::MAX
            ),
            DomainError::InvalidAspect(value) => write!(
                f,
                "Invalid aspect ratio: '{}'. Please enter 9:16 or 16:9",
                value
            ),
            DomainError::DurationUnknown(source) => {
                write!(f, "Could not determine the duration of {}", source)
            }
            DomainError::FileNotFound(msg) => write!(f, "File not found: {}", msg),
            DomainError::ExternalToolFailed(msg) => write!(f, "External tool failed: {}", msg),
            DomainError::TooManySegments(count) => write!(
                f,
                "Too many segments: {} windows exceed the limit of {}; use a longer segment length",
                count,
                crate::planner::segmenter::MAX_WINDOWS
            ),
        }
    }
}

impl std::error::Error for DomainError {}

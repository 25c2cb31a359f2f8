//! Segmentation planning module
//!
//! Splits a source timeline into fixed-length windows, moves window bounds
//! out of an optional cut-out range, drops windows that collapse, and labels
//! the survivors (`Part One`, `Part Two`, ...) with a title-overlay filter chain.

use serde::{Deserialize, Serialize};

use crate::domain::model::SegmentPlan;

pub mod filter;
pub mod segmenter;

pub use filter::{FilterChainBuilder, FilterConfig, OverlayStyle};
pub use segmenter::{window_count, windows, SegmentationPlanner, Window};

/// Result of one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationPlan {
    /// Source duration in seconds
    pub duration: f64,
    /// Fixed-length windows before cut-out adjustment
    pub window_count: u32,
    /// Windows that collapsed under the cut-out
    pub dropped_windows: u32,
    /// Emitted segments in timeline order
    pub segments: Vec<SegmentPlan>,
}

impl SegmentationPlan {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total seconds of footage across all segments
    pub fn planned_seconds(&self) -> f64 {
        self.segments.iter().map(|s| s.range.duration()).sum()
    }
}

//! Fixed-length window segmentation with cut-out exclusion

use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{PlanParameters, SegmentLength, SegmentPlan, TimeRange};
use crate::domain::rules::{CutOutAdjuster, PartLabeler, WindowAdjustment};
use crate::planner::filter::{FilterChainBuilder, FilterConfig};
use crate::planner::SegmentationPlan;

/// One fixed-length slice of the source timeline before cut-out adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// 1-based window position
    pub position: u32,
    pub start: f64,
    pub end: f64,
}

/// Most windows a single plan may hold
pub const MAX_WINDOWS: u32 = 10_000;

/// Number of windows covering `[0, duration)`: `ceil(duration / length)`.
///
/// Exact multiples produce no empty trailing window. The result is corrected
/// for floating-point error so that the last window always reaches `duration`.
/// Counts far beyond [`MAX_WINDOWS`] are returned uncorrected (saturating).
pub fn window_count(duration: f64, segment_length: SegmentLength) -> u64 {
    if !(duration.is_finite() && duration > 0.0) {
        return 0;
    }

    let length = segment_length.as_seconds();
    let estimate = (duration / length).ceil();
    if estimate > f64::from(u32::MAX) {
        return estimate as u64;
    }

    let mut count = estimate as u64;
    while (count as f64) * length < duration {
        count += 1;
    }
    while count > 1 && ((count - 1) as f64) * length >= duration {
        count -= 1;
    }
    count
}

/// Raw windows `[i * length, min((i + 1) * length, duration))`.
///
/// Fails with [`DomainError::TooManySegments`] above [`MAX_WINDOWS`].
pub fn windows(duration: f64, segment_length: SegmentLength) -> Result<Vec<Window>, DomainError> {
    let count = window_count(duration, segment_length);
    if count > u64::from(MAX_WINDOWS) {
        return Err(DomainError::TooManySegments(count));
    }

    let length = segment_length.as_seconds();
    Ok((0..count as u32)
        .map(|i| {
            let start = i as f64 * length;
            Window {
                position: i + 1,
                start,
                end: (start + length).min(duration),
            }
        })
        .collect())
}

/// Turns a duration and validated parameters into segment plans
#[derive(Debug, Clone, Default)]
pub struct SegmentationPlanner {
    filter: FilterConfig,
}

impl SegmentationPlanner {
    pub fn new(filter: FilterConfig) -> Self {
        Self { filter }
    }

    /// Plan every output segment for a source of `duration` seconds.
    ///
    /// A zero, negative or non-finite duration aborts with
    /// [`DomainError::DurationUnknown`]. Windows that collapse under the
    /// cut-out are skipped; surviving windows are numbered 1, 2, 3, ... in
    /// timeline order.
    pub fn plan(
        &self,
        duration: f64,
        params: &PlanParameters,
    ) -> Result<SegmentationPlan, DomainError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(DomainError::DurationUnknown(format!(
                "the source video (reported {} s)",
                duration
            )));
        }

        let cut_out = params.cut_out.as_ref();
        let raw_windows = windows(duration, params.segment_length)?;
        let filter_chain = FilterChainBuilder::new(&self.filter);

        info!(
            duration,
            segment_length = params.segment_length.get(),
            aspect = %params.aspect,
            windows = raw_windows.len(),
            cut_out = ?cut_out.map(|c| c.to_string()),
            "Planning segments"
        );

        let mut segments = Vec::with_capacity(raw_windows.len());
        let mut dropped_windows = 0u32;

        for window in &raw_windows {
            if CutOutAdjuster::straddles(window.start, window.end, cut_out) {
                warn!(
                    window = window.position,
                    "Cut-out lies strictly inside this part and will not be removed from it"
                );
            }

            let (start, end) = match CutOutAdjuster::classify(window.start, window.end, cut_out) {
                WindowAdjustment::Kept { start, end } => (start, end),
                WindowAdjustment::Dropped => {
                    debug!(window = window.position, "Window falls inside cut-out, skipping");
                    dropped_windows += 1;
                    continue;
                }
            };

            let index = segments.len() as u32 + 1;
            let label = PartLabeler::label(index);
            let title = PartLabeler::title(&params.title_base, &label);

            segments.push(SegmentPlan {
                index,
                window_index: window.position,
                range: TimeRange::new(start, end)?,
                filter_chain: filter_chain.build(params.aspect, &title),
                label,
                title,
            });
        }

        info!(
            segments = segments.len(),
            dropped = dropped_windows,
            "Segmentation plan ready"
        );

        Ok(SegmentationPlan {
            duration,
            window_count: raw_windows.len() as u32,
            dropped_windows,
            segments,
        })
    }
}

//! Transcoding engine invocation module

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::model::TimeRange;

pub mod command;
pub mod runner;

pub use command::{FfmpegInvocation, InvocationBuilder};
pub use runner::{SegmentJob, SegmentRunner};

/// Codec selection and write policy passed to every engine call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    /// Video codec
    pub video_codec: String,
    /// Audio codec
    pub audio_codec: String,
    /// Pass `-strict experimental` for older builds of the AAC encoder
    pub strict_experimental: bool,
    /// Replace existing output files instead of failing the segment
    pub overwrite: bool,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            strict_experimental: true,
            overwrite: false,
        }
    }
}

/// Per-segment result of an engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SegmentStatus {
    /// Engine exited successfully
    Succeeded,
    /// Engine could not be started or reported failure
    Failed { message: String },
    /// Not executed (dry run)
    Skipped,
}

/// What happened to one planned segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentOutcome {
    pub index: u32,
    pub label: String,
    pub output_path: String,
    pub range: TimeRange,
    /// Engine command line as it was (or would have been) run
    pub command: String,
    #[serde(flatten)]
    pub status: SegmentStatus,
    /// Wall time spent in the engine, milliseconds
    pub elapsed_ms: u64,
}

impl SegmentOutcome {
    pub fn new(job: &SegmentJob, status: SegmentStatus, elapsed: Duration) -> Self {
        Self {
            index: job.plan.index,
            label: job.plan.label.clone(),
            output_path: job.invocation.output.display().to_string(),
            range: job.plan.range,
            command: job.invocation.command_line(),
            status,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, SegmentStatus::Failed { .. })
    }
}

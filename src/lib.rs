//! SplitX video splitter library
//!
//! Plans fixed-length segments of a video, moves segment bounds out of an
//! optional cut-out range, labels the survivors `Part One`, `Part Two`, ...
//! and renders each one through the ffmpeg binary with a title overlay.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod planner;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use app::{SplitInteractor, SplitReport, SplitRequest};
pub use config_initialization::SplitterConfig;
pub use domain::errors::DomainError;
pub use domain::model::{AspectMode, CutOutRange, PlanParameters, SegmentLength, SegmentPlan};
pub use error::{SplitXError, SplitXResult};
pub use planner::{SegmentationPlan, SegmentationPlanner};

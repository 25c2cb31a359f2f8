// Split interactor - Orchestrates the probe, plan and render use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config_initialization::SplitterConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::PlanParameters;
use crate::engine::{
    InvocationBuilder, SegmentJob, SegmentOutcome, SegmentRunner, SegmentStatus,
};
use crate::error::SplitXResult;
use crate::planner::{SegmentationPlan, SegmentationPlanner};
use crate::ports::{ExecutePort, ProbePort};
use crate::probe::{MediaSummary, VideoInspector};

/// One source file to split
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub source: PathBuf,
    pub params: PlanParameters,
    /// Write parts here instead of next to the source
    pub output_dir: Option<PathBuf>,
    /// Engine processes allowed at once
    pub jobs: usize,
    /// Plan and build commands without running the engine
    pub dry_run: bool,
}

impl SplitRequest {
    pub fn new(source: impl Into<PathBuf>, params: PlanParameters) -> Self {
        Self {
            source: source.into(),
            params,
            output_dir: None,
            jobs: 1,
            dry_run: false,
        }
    }
}

/// Result of splitting one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub source: String,
    pub duration: f64,
    pub window_count: u32,
    pub dropped_windows: u32,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Ordered by segment index
    pub outcomes: Vec<SegmentOutcome>,
}

impl SplitReport {
    pub fn succeeded_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == SegmentStatus::Succeeded)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Interactor for the split use case
pub struct SplitInteractor {
    inspector: VideoInspector,
    executor: Arc<dyn ExecutePort>,
    planner: SegmentationPlanner,
    invocations: InvocationBuilder,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        config: &SplitterConfig,
    ) -> Self {
        let invocations = InvocationBuilder::new(config.ffmpeg_path.clone(), config.encoder.clone())
            .with_extension(config.output_extension.clone());

        Self {
            inspector: VideoInspector::new(probe_port),
            executor: execute_port,
            planner: SegmentationPlanner::new(config.filter.clone()),
            invocations,
        }
    }

    /// Resolve the duration of a source file
    pub async fn inspect(&self, source: &Path) -> Result<MediaSummary, DomainError> {
        self.inspector.inspect(source).await
    }

    /// Probe a source and plan its segments without building engine calls
    pub async fn plan_source(
        &self,
        source: &Path,
        params: &PlanParameters,
    ) -> Result<(MediaSummary, SegmentationPlan), DomainError> {
        let media = self.inspect(source).await?;
        let plan = self.planner.plan(media.duration, params)?;
        Ok((media, plan))
    }

    /// Plan for a known duration, skipping the probe
    pub fn plan_duration(
        &self,
        duration: f64,
        params: &PlanParameters,
    ) -> Result<SegmentationPlan, DomainError> {
        self.planner.plan(duration, params)
    }

    /// Split one source: probe, plan, then run one engine call per segment.
    ///
    /// Validation and duration errors abort before any engine call. Engine
    /// failures are recorded per segment in the report.
    pub async fn split(&self, request: &SplitRequest) -> SplitXResult<SplitReport> {
        let started_at = Utc::now();
        info!(source = %request.source.display(), "Starting split operation");

        let (media, plan) = self.plan_source(&request.source, &request.params).await?;
        if plan.is_empty() {
            warn!(source = %request.source.display(), "Cut-out removes every part; nothing to write");
        }

        let builder = self
            .invocations
            .clone()
            .with_output_dir(request.output_dir.clone());

        let jobs = plan
            .segments
            .iter()
            .map(|segment| {
                Ok(SegmentJob {
                    invocation: builder.build(&request.source, segment)?,
                    plan: segment.clone(),
                })
            })
            .collect::<SplitXResult<Vec<_>>>()?;

        let outcomes = if request.dry_run {
            jobs.iter()
                .map(|job| {
                    info!("Dry run: {}", job.invocation.command_line());
                    SegmentOutcome::new(job, SegmentStatus::Skipped, std::time::Duration::ZERO)
                })
                .collect()
        } else {
            if let Some(dir) = &request.output_dir {
                std::fs::create_dir_all(dir)?;
            }
            SegmentRunner::new(Arc::clone(&self.executor), request.jobs)
                .run(jobs)
                .await
        };

        let report = SplitReport {
            source: media.path,
            duration: media.duration,
            window_count: plan.window_count,
            dropped_windows: plan.dropped_windows,
            dry_run: request.dry_run,
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };

        if report.all_succeeded() {
            info!(segments = report.outcomes.len(), "Split operation completed");
        } else {
            warn!(
                failed = report.failed_count(),
                segments = report.outcomes.len(),
                "Split operation finished with failures"
            );
        }

        Ok(report)
    }
}

//! Segment execution: sequential by default, bounded concurrency on request

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::domain::model::SegmentPlan;
use crate::engine::{FfmpegInvocation, SegmentOutcome, SegmentStatus};
use crate::ports::ExecutePort;

/// A planned segment together with its engine call
#[derive(Debug, Clone)]
pub struct SegmentJob {
    pub plan: SegmentPlan,
    pub invocation: FfmpegInvocation,
}

/// Runs segment jobs against an [`ExecutePort`].
///
/// A failing segment is recorded and the remaining segments still run.
/// Outcomes always come back ordered by segment index.
pub struct SegmentRunner {
    executor: Arc<dyn ExecutePort>,
    jobs: usize,
}

impl SegmentRunner {
    /// `jobs` is the number of engine processes allowed at once; 0 is treated as 1
    pub fn new(executor: Arc<dyn ExecutePort>, jobs: usize) -> Self {
        Self {
            executor,
            jobs: jobs.max(1),
        }
    }

    pub async fn run(&self, jobs: Vec<SegmentJob>) -> Vec<SegmentOutcome> {
        if self.jobs == 1 || jobs.len() <= 1 {
            let mut outcomes = Vec::with_capacity(jobs.len());
            for job in &jobs {
                outcomes.push(run_one(self.executor.as_ref(), job).await);
            }
            return outcomes;
        }

        self.run_concurrent(jobs).await
    }

    async fn run_concurrent(&self, jobs: Vec<SegmentJob>) -> Vec<SegmentOutcome> {
        info!(jobs = self.jobs, segments = jobs.len(), "Running segments concurrently");

        let semaphore = Arc::new(Semaphore::new(self.jobs));
        let mut tasks = JoinSet::new();

        for job in jobs.iter().cloned() {
            let executor = Arc::clone(&self.executor);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                run_one(executor.as_ref(), &job).await
            });
        }

        let mut outcomes = Vec::with_capacity(jobs.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => error!(error = %e, "Segment task aborted"),
            }
        }

        // A task that panicked left no outcome behind
        for job in &jobs {
            if !outcomes.iter().any(|o| o.index == job.plan.index) {
                outcomes.push(SegmentOutcome::new(
                    job,
                    SegmentStatus::Failed {
                        message: "segment task aborted".to_string(),
                    },
                    Duration::ZERO,
                ));
            }
        }

        outcomes.sort_by_key(|o| o.index);
        outcomes
    }
}

async fn run_one(executor: &dyn ExecutePort, job: &SegmentJob) -> SegmentOutcome {
    info!(
        segment = job.plan.index,
        label = %job.plan.label,
        "Running command: {}",
        job.invocation.command_line()
    );

    let started = Instant::now();
    let status = match executor.execute(&job.invocation).await {
        Ok(()) => {
            info!(segment = job.plan.index, output = %job.invocation.output.display(), "Segment written");
            SegmentStatus::Succeeded
        }
        Err(e) => {
            error!(segment = job.plan.index, error = %e, "Segment failed");
            SegmentStatus::Failed {
                message: e.to_string(),
            }
        }
    };

    SegmentOutcome::new(job, status, started.elapsed())
}

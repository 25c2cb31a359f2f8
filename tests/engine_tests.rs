//! Engine and interactor tests against in-memory ports

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use splitx_cli::engine::{
    EncoderSettings, FfmpegInvocation, InvocationBuilder, SegmentJob, SegmentRunner, SegmentStatus,
};
use splitx_cli::ports::{ExecutePort, ProbePort};
use splitx_cli::*;

// Test utilities

/// Probe returning canned engine output
struct FakeProbe {
    output: String,
}

impl FakeProbe {
    fn with_duration(duration: &str) -> Arc<Self> {
        Arc::new(Self {
            output: format!(
                "Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'clip.mp4':\n  Duration: {}, start: 0.000000, bitrate: 900 kb/s\n",
                duration
            ),
        })
    }

    fn without_duration() -> Arc<Self> {
        Arc::new(Self {
            output: "clip.mp4: Invalid data found when processing input\n".to_string(),
        })
    }
}

#[async_trait]
impl ProbePort for FakeProbe {
    async fn diagnostic_output(&self, _file_path: &Path) -> Result<String, DomainError> {
        Ok(self.output.clone())
    }
}

/// Executor recording every invocation; fails outputs whose name contains a marker
#[derive(Default)]
struct RecordingExecutor {
    calls: Mutex<Vec<FfmpegInvocation>>,
    fail_markers: HashSet<String>,
    delay: Option<Duration>,
    running: AtomicUsize,
    peak: AtomicUsize,
}

impl RecordingExecutor {
    fn failing(markers: &[&str]) -> Self {
        Self {
            fail_markers: markers.iter().map(|m| m.to_string()).collect(),
            ..Self::default()
        }
    }

    fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    fn outputs(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.output.clone())
            .collect()
    }
}

#[async_trait]
impl ExecutePort for RecordingExecutor {
    async fn execute(&self, invocation: &FfmpegInvocation) -> Result<(), DomainError> {
        let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.running.fetch_sub(1, Ordering::SeqCst);

        self.calls.lock().unwrap().push(invocation.clone());

        let name = invocation.output.display().to_string();
        if self.fail_markers.iter().any(|m| name.contains(m.as_str())) {
            return Err(DomainError::ExternalToolFailed(format!(
                "ffmpeg exited with 1 while writing {}",
                name
            )));
        }
        Ok(())
    }
}

fn create_test_video(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"fake video data").unwrap();
    path
}

fn interactor(probe: Arc<FakeProbe>, executor: Arc<RecordingExecutor>) -> SplitInteractor {
    SplitInteractor::new(probe, executor, &SplitterConfig::default())
}

fn jobs_for(duration: f64, length: u32) -> Vec<SegmentJob> {
    let params = PlanParameters::parse(length, "16:9", None, None, None).unwrap();
    let plan = SegmentationPlanner::default().plan(duration, &params).unwrap();
    let builder = InvocationBuilder::new("ffmpeg", EncoderSettings::default());
    plan.segments
        .into_iter()
        .map(|segment| SegmentJob {
            invocation: builder.build(Path::new("/videos/clip.mp4"), &segment).unwrap(),
            plan: segment,
        })
        .collect()
}

#[tokio::test]
async fn test_split_runs_one_invocation_per_segment() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let executor = Arc::new(RecordingExecutor::default());
    let interactor = interactor(FakeProbe::with_duration("00:02:05.50"), Arc::clone(&executor));

    let params = PlanParameters::parse(60, "16:9", Some("Trip"), None, None).unwrap();
    let report = interactor
        .split(&SplitRequest::new(&source, params))
        .await
        .unwrap();

    assert_eq!(report.duration, 125.5);
    assert_eq!(report.outcomes.len(), 3);
    assert!(report.all_succeeded());
    assert!(report.finished_at >= report.started_at);
    assert_eq!(
        executor.outputs(),
        vec![
            dir.path().join("clip_Part_One.mp4"),
            dir.path().join("clip_Part_Two.mp4"),
            dir.path().join("clip_Part_Three.mp4"),
        ]
    );

    let calls = executor.calls.lock().unwrap();
    assert_eq!(calls[2].start, 120.0);
    assert_eq!(calls[2].end, 125.5);
    assert!(calls[0].filter_chain.contains("text='Trip - Part One'"));
}

#[tokio::test]
async fn test_failed_segment_does_not_stop_the_rest() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let executor = Arc::new(RecordingExecutor::failing(&["Part_Two"]));
    let interactor = interactor(FakeProbe::with_duration("00:02:05.00"), Arc::clone(&executor));

    let params = PlanParameters::parse(60, "9:16", None, None, None).unwrap();
    let report = interactor
        .split(&SplitRequest::new(&source, params))
        .await
        .unwrap();

    assert_eq!(executor.outputs().len(), 3);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.succeeded_count(), 2);
    assert!(!report.all_succeeded());
    assert!(matches!(report.outcomes[1].status, SegmentStatus::Failed { .. }));
    assert_eq!(report.outcomes[2].status, SegmentStatus::Succeeded);
}

#[tokio::test]
async fn test_missing_duration_aborts_before_any_engine_call() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let executor = Arc::new(RecordingExecutor::default());
    let interactor = interactor(FakeProbe::without_duration(), Arc::clone(&executor));

    let params = PlanParameters::parse(60, "16:9", None, None, None).unwrap();
    let err = interactor
        .split(&SplitRequest::new(&source, params))
        .await
        .unwrap_err();

    assert!(matches!(err, SplitXError::Domain(DomainError::DurationUnknown(_))));
    assert!(executor.outputs().is_empty());
}

#[tokio::test]
async fn test_missing_source_is_reported() {
    let executor = Arc::new(RecordingExecutor::default());
    let interactor = interactor(FakeProbe::with_duration("00:01:00.00"), Arc::clone(&executor));

    let err = interactor
        .inspect(Path::new("/definitely/not/here.mp4"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::FileNotFound(_)));
}

#[tokio::test]
async fn test_dry_run_skips_the_engine() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let out_dir = dir.path().join("parts");
    let executor = Arc::new(RecordingExecutor::default());
    let interactor = interactor(FakeProbe::with_duration("00:00:45.00"), Arc::clone(&executor));

    let params = PlanParameters::parse(20, "16:9", None, None, None).unwrap();
    let request = SplitRequest {
        output_dir: Some(out_dir.clone()),
        dry_run: true,
        ..SplitRequest::new(&source, params)
    };
    let report = interactor.split(&request).await.unwrap();

    assert!(executor.outputs().is_empty());
    assert!(!out_dir.exists());
    assert_eq!(report.outcomes.len(), 3);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == SegmentStatus::Skipped));
    assert!(report.outcomes[0].command.starts_with("ffmpeg -i "));
    assert!(report.outcomes[0]
        .output_path
        .ends_with("clip_Part_One.mp4"));
}

#[tokio::test]
async fn test_output_dir_is_created() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let out_dir = dir.path().join("nested").join("parts");
    let executor = Arc::new(RecordingExecutor::default());
    let interactor = interactor(FakeProbe::with_duration("00:00:15.00"), Arc::clone(&executor));

    let params = PlanParameters::parse(10, "16:9", None, None, None).unwrap();
    let request = SplitRequest {
        output_dir: Some(out_dir.clone()),
        ..SplitRequest::new(&source, params)
    };
    interactor.split(&request).await.unwrap();

    assert!(out_dir.is_dir());
    assert_eq!(executor.outputs()[0], out_dir.join("clip_Part_One.mp4"));
}

#[tokio::test]
async fn test_cut_out_covering_video_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let executor = Arc::new(RecordingExecutor::default());
    let interactor = interactor(FakeProbe::with_duration("00:00:25.00"), Arc::clone(&executor));

    let params =
        PlanParameters::parse(10, "16:9", None, Some("00:00:00"), Some("00:01:00")).unwrap();
    let report = interactor
        .split(&SplitRequest::new(&source, params))
        .await
        .unwrap();

    assert!(report.outcomes.is_empty());
    assert!(report.all_succeeded());
    assert_eq!(report.dropped_windows, 3);
    assert!(executor.outputs().is_empty());
}

#[tokio::test]
async fn test_sequential_runner_keeps_order() {
    let executor = Arc::new(RecordingExecutor::default());
    let runner = SegmentRunner::new(Arc::clone(&executor) as Arc<dyn ExecutePort>, 0);

    let outcomes = runner.run(jobs_for(125.0, 60)).await;
    let indices: Vec<u32> = outcomes.iter().map(|o| o.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert_eq!(executor.peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_runner_is_bounded_and_ordered() {
    let executor = Arc::new(RecordingExecutor::slow(Duration::from_millis(20)));
    let runner = SegmentRunner::new(Arc::clone(&executor) as Arc<dyn ExecutePort>, 2);

    let outcomes = runner.run(jobs_for(100.0, 10)).await;

    let indices: Vec<u32> = outcomes.iter().map(|o| o.index).collect();
    assert_eq!(indices, (1..=10).collect::<Vec<_>>());
    assert!(outcomes.iter().all(|o| o.status == SegmentStatus::Succeeded));
    assert_eq!(executor.outputs().len(), 10);
    assert!(executor.peak.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn test_report_serializes_with_status_tags() {
    let dir = TempDir::new().unwrap();
    let source = create_test_video(&dir, "clip.mp4");
    let executor = Arc::new(RecordingExecutor::failing(&["Part_One"]));
    let interactor = interactor(FakeProbe::with_duration("00:00:15.00"), Arc::clone(&executor));

    let params = PlanParameters::parse(10, "16:9", None, None, None).unwrap();
    let report = interactor
        .split(&SplitRequest::new(&source, params))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"][0]["status"], "failed");
    assert!(json["outcomes"][0]["message"]
        .as_str()
        .unwrap()
        .contains("clip_Part_One.mp4"));
    assert_eq!(json["outcomes"][1]["status"], "succeeded");
    assert_eq!(json["outcomes"][1]["label"], "Part Two");
}

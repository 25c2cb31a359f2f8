use std::path::{Path, PathBuf};

use splitx_cli::domain::model::{TimeRange, TimeSpec};
use splitx_cli::domain::rules::PartLabeler;
use splitx_cli::engine::{EncoderSettings, InvocationBuilder};
use splitx_cli::planner::{window_count, FilterConfig};
use splitx_cli::probe::parse_duration_seconds;
use splitx_cli::*;

/// Test utilities for planning
mod test_utils {
    use super::*;

    pub fn params(length: u32, aspect: &str, cut: Option<(&str, &str)>) -> PlanParameters {
        PlanParameters::parse(
            length,
            aspect,
            None,
            cut.map(|(start, _)| start),
            cut.map(|(_, end)| end),
        )
        .unwrap()
    }

    pub fn ranges(plan: &SegmentationPlan) -> Vec<(f64, f64)> {
        plan.segments
            .iter()
            .map(|s| (s.range.start, s.range.end))
            .collect()
    }

    pub fn labels(plan: &SegmentationPlan) -> Vec<&str> {
        plan.segments.iter().map(|s| s.label.as_str()).collect()
    }
}

use test_utils::*;

#[test]
fn test_plain_split_of_125_seconds() {
    let plan = SegmentationPlanner::default()
        .plan(125.0, &params(60, "16:9", None))
        .unwrap();

    assert_eq!(plan.window_count, 3);
    assert_eq!(ranges(&plan), vec![(0.0, 60.0), (60.0, 120.0), (120.0, 125.0)]);
    assert_eq!(labels(&plan), vec!["Part One", "Part Two", "Part Three"]);
    assert_eq!(plan.segments[2].title, "Video - Part Three");
}

#[test]
fn test_cut_out_moves_window_bounds() {
    let plan = SegmentationPlanner::default()
        .plan(125.0, &params(60, "16:9", Some(("00:00:30", "00:01:30"))))
        .unwrap();

    assert_eq!(ranges(&plan), vec![(0.0, 30.0), (90.0, 120.0), (120.0, 125.0)]);
    assert_eq!(labels(&plan), vec!["Part One", "Part Two", "Part Three"]);
    assert_eq!(plan.dropped_windows, 0);
}

#[test]
fn test_window_inside_cut_out_is_dropped_and_survivors_renumbered() {
    // Windows [0,10) [10,20) [20,30) [30,40); the second lies inside [10,20]
    let plan = SegmentationPlanner::default()
        .plan(40.0, &params(10, "16:9", Some(("00:00:10", "00:00:20"))))
        .unwrap();

    assert_eq!(plan.window_count, 4);
    assert_eq!(plan.dropped_windows, 1);
    assert_eq!(ranges(&plan), vec![(0.0, 10.0), (20.0, 30.0), (30.0, 40.0)]);
    assert_eq!(labels(&plan), vec!["Part One", "Part Two", "Part Three"]);

    let windows: Vec<u32> = plan.segments.iter().map(|s| s.window_index).collect();
    assert_eq!(windows, vec![1, 3, 4]);
}

#[test]
fn test_cut_out_covering_everything_yields_empty_plan() {
    let plan = SegmentationPlanner::default()
        .plan(25.0, &params(10, "9:16", Some(("00:00:00", "00:00:30"))))
        .unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.dropped_windows, 3);
}

#[test]
fn test_indices_are_contiguous_and_ranges_non_empty() {
    let plan = SegmentationPlanner::default()
        .plan(3600.5, &params(45, "9:16", Some(("00:10:00", "00:25:00"))))
        .unwrap();

    for (i, segment) in plan.segments.iter().enumerate() {
        assert_eq!(segment.index, i as u32 + 1);
        assert!(segment.range.end > segment.range.start);
    }
    for pair in plan.segments.windows(2) {
        assert!(pair[0].range.end <= pair[1].range.start);
    }
}

#[test]
fn test_window_count_is_ceiling() {
    let len = SegmentLength::new(60).unwrap();
    assert_eq!(window_count(120.0, len), 2);
    assert_eq!(window_count(120.01, len), 3);
    assert_eq!(window_count(0.5, len), 1);

    let plan = SegmentationPlanner::default()
        .plan(120.0, &params(60, "16:9", None))
        .unwrap();
    assert_eq!(plan.segments.last().unwrap().range.end, 120.0);
}

#[test]
fn test_unknown_duration_aborts_planning() {
    let err = SegmentationPlanner::default()
        .plan(0.0, &params(60, "16:9", None))
        .unwrap_err();
    assert!(matches!(err, DomainError::DurationUnknown(_)));
    assert!(!err.is_validation());
}

#[test]
fn test_duration_line_parsing() {
    let banner = "Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'talk.mp4':\n  Duration: 00:02:05.50, start: 0.000000, bitrate: 1200 kb/s\n";
    assert_eq!(parse_duration_seconds(banner), 125.5);
    assert_eq!(parse_duration_seconds("no duration here"), 0.0);
}

#[test]
fn test_time_string_validation() {
    assert_eq!(TimeSpec::parse("01:02:03").unwrap().as_seconds(), 3723.0);
    assert!(TimeSpec::parse("12:xx:00").unwrap_err().is_validation());
    assert!(TimeSpec::parse("00:60:00").is_err());
    assert!(TimeSpec::parse("00:01").is_err());
}

#[test]
fn test_parameter_validation_happens_up_front() {
    assert!(matches!(
        PlanParameters::parse(5, "16:9", None, None, None),
        Err(DomainError::InvalidSegmentLength(5))
    ));
    assert!(matches!(
        PlanParameters::parse(60, "4:3", None, None, None),
        Err(DomainError::InvalidAspect(_))
    ));
    assert!(matches!(
        PlanParameters::parse(60, "16:9", None, Some("00:00:10"), None),
        Err(DomainError::BadArgs(_))
    ));
    assert!(matches!(
        PlanParameters::parse(60, "16:9", None, Some("00:00:20"), Some("00:00:10")),
        Err(DomainError::InvalidTimeRange(_))
    ));
}

#[test]
fn test_spoken_ordinals() {
    assert_eq!(PartLabeler::spoken_ordinal(1), "One");
    assert_eq!(PartLabeler::spoken_ordinal(21), "Twenty One");
    assert_eq!(PartLabeler::spoken_ordinal(100), "One Hundred");
    assert_eq!(PartLabeler::spoken_ordinal(101), "101");
    assert_eq!(PartLabeler::label(3), "Part Three");
}

#[test]
fn test_portrait_plan_builds_engine_invocation() {
    let plan = SegmentationPlanner::new(FilterConfig::default())
        .plan(125.0, &PlanParameters::parse(60, "9:16", Some("Trip"), None, None).unwrap())
        .unwrap();
    let segment = &plan.segments[1];
    assert!(segment.filter_chain.starts_with("crop=ih*9/16:ih:(iw-ih*9/16)/2:0,"));
    assert!(segment.filter_chain.contains("text='Trip - Part Two'"));

    let invocation = InvocationBuilder::new("ffmpeg", EncoderSettings::default())
        .build(Path::new("/videos/trip.mp4"), segment)
        .unwrap();
    assert_eq!(invocation.output, PathBuf::from("/videos/trip_Part_Two.mp4"));
    assert_eq!(invocation.start, 60.0);
    assert_eq!(invocation.end, 120.0);
    assert_eq!(segment.range, TimeRange::new(60.0, 120.0).unwrap());
}

//! Command implementations

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::adapters::TomlConfigAdapter;
use crate::app::{AppContainer, DefaultAppContainer, SplitReport, SplitRequest};
use crate::cli::args::{ConfigArgs, ConfigCommandArgs, PlanArgs, PlanOptions, ProbeArgs, SplitArgs};
use crate::config_initialization::{initialize_configuration, SplitterConfig};
use crate::domain::model::PlanParameters;
use crate::engine::SegmentStatus;
use crate::planner::SegmentationPlan;
use crate::probe::MediaSummary;
use crate::utils::path::discover_sources;
use crate::utils::time::format_hms;
use crate::utils::Utils;

/// Resolve configuration from file, environment and flags
pub fn load_config(args: &ConfigArgs) -> Result<SplitterConfig> {
    initialize_configuration(args.config.as_deref(), &args.overrides())
        .context("Failed to load configuration")
}

/// Validate segmentation flags; the configured title fills in a missing `--title`
fn plan_parameters(options: &PlanOptions, config: &SplitterConfig) -> Result<PlanParameters> {
    let title = options
        .title
        .as_deref()
        .or(Some(config.default_title.as_str()));

    PlanParameters::parse(
        options.length,
        &options.aspect,
        title,
        options.cut_start.as_deref(),
        options.cut_end.as_deref(),
    )
    .context("Invalid split parameters")
}

/// Execute the split command
pub async fn split(args: SplitArgs, config: SplitterConfig) -> Result<()> {
    info!("Starting split operation");
    info!("Input: {}", args.input.display());

    let params = plan_parameters(&args.plan, &config)?;
    let sources = discover_sources(&args.input, args.recursive)
        .with_context(|| format!("Failed to read input {}", args.input.display()))?;
    if sources.is_empty() {
        anyhow::bail!("No video files found in {}", args.input.display());
    }

    let jobs = match args.jobs {
        0 => num_cpus::get(),
        n => n,
    };
    info!(sources = sources.len(), jobs, "Splitting sources");

    let container = DefaultAppContainer::new(config);
    let interactor = container.split_interactor();
    let source_count = sources.len();

    let mut reports = Vec::with_capacity(source_count);
    let mut source_failures = Vec::new();
    for source in sources {
        let request = SplitRequest {
            source: source.clone(),
            params: params.clone(),
            output_dir: args.output_dir.clone(),
            jobs,
            dry_run: args.dry_run,
        };

        // One unreadable source must not stop the others
        match interactor.split(&request).await {
            Ok(report) => {
                if !args.json {
                    display_split_report(&report);
                }
                reports.push(report);
            }
            Err(e) => {
                error!(source = %source.display(), error = %e, "Failed to split source");
                source_failures.push(format!("{}: {}", source.display(), e));
            }
        }
    }

    if args.json && !reports.is_empty() {
        let serialized = match reports.as_slice() {
            [report] if source_count == 1 => serde_json::to_string_pretty(report),
            _ => serde_json::to_string_pretty(&reports),
        };
        let json = serialized.context("Failed to serialize split report to JSON")?;
        println!("{}", json);
    }

    let mut problems = Vec::new();
    if !source_failures.is_empty() {
        problems.push(format!(
            "{} of {} sources could not be split:\n  {}",
            source_failures.len(),
            source_count,
            source_failures.join("\n  ")
        ));
    }

    let failed: usize = reports.iter().map(SplitReport::failed_count).sum();
    let total: usize = reports.iter().map(|r| r.outcomes.len()).sum();
    if failed > 0 {
        error!(failed, total, "Some parts could not be written");
        problems.push(format!("{} of {} parts failed", failed, total));
    }

    if !problems.is_empty() {
        anyhow::bail!("{}", problems.join("\n"));
    }

    info!("Split operation completed successfully");
    Ok(())
}

/// Execute the plan command
pub async fn plan(args: PlanArgs, config: SplitterConfig) -> Result<()> {
    info!("Starting plan operation");

    let params = plan_parameters(&args.plan, &config)?;
    let container = DefaultAppContainer::new(config);
    let interactor = container.split_interactor();

    let plan = match (&args.input, args.duration) {
        (Some(input), _) => {
            let (_, plan) = interactor
                .plan_source(input, &params)
                .await
                .with_context(|| format!("Failed to plan {}", input.display()))?;
            plan
        }
        (None, Some(duration)) => interactor
            .plan_duration(duration, &params)
            .context("Failed to plan segments")?,
        (None, None) => anyhow::bail!("Either --duration or --input is required"),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&plan)
            .context("Failed to serialize plan to JSON")?;
        println!("{}", json);
    } else {
        display_plan(&plan);
    }

    info!("Plan operation completed successfully");
    Ok(())
}

/// Execute the probe command
pub async fn probe(args: ProbeArgs, config: SplitterConfig) -> Result<()> {
    info!("Starting probe operation");
    info!("Input: {}", args.input.display());

    let container = DefaultAppContainer::new(config);
    let media = container
        .split_interactor()
        .inspect(&args.input)
        .await
        .context("Failed to inspect input file")?;

    if args.json {
        let json = serde_json::to_string_pretty(&media)
            .context("Failed to serialize media info to JSON")?;
        println!("{}", json);
    } else {
        display_media_summary(&media);
    }

    info!("Probe operation completed successfully");
    Ok(())
}

/// Execute the config command
pub fn config(args: ConfigCommandArgs, config: SplitterConfig) -> Result<()> {
    match args.write {
        Some(path) => {
            TomlConfigAdapter::save(&config, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Configuration written to {}", path.display());
        }
        None => {
            let text = TomlConfigAdapter::to_toml_string(&config)
                .context("Failed to serialize configuration")?;
            print!("{}", text);
        }
    }
    Ok(())
}

/// Display a plan in human-readable format
fn display_plan(plan: &SegmentationPlan) {
    println!("Segmentation Plan");
    println!("=================");
    println!(
        "Duration: {} ({} windows, {} dropped)",
        format_hms(plan.duration),
        plan.window_count,
        plan.dropped_windows
    );
    println!();

    if plan.is_empty() {
        println!("No parts: the cut-out covers the whole video");
        return;
    }

    for segment in &plan.segments {
        println!(
            "  {:>3}. {:<18} {} -> {}  \"{}\"",
            segment.index,
            segment.label,
            format_hms(segment.range.start),
            format_hms(segment.range.end),
            segment.title
        );
    }
    println!();
    println!("Total footage: {}", format_hms(plan.planned_seconds()));
}

/// Display media information in human-readable format
fn display_media_summary(media: &MediaSummary) {
    println!("Media Information");
    println!("=================");
    println!("File: {}", media.path);
    println!("Duration: {} ({}s)", format_hms(media.duration), media.duration);
    println!("File Size: {}", Utils::format_file_size(media.file_size));
}

/// Display a split report in human-readable format
fn display_split_report(report: &SplitReport) {
    println!("Split Results: {}", report.source);
    println!("==============");

    if report.outcomes.is_empty() {
        println!("No parts written: the cut-out covers the whole video");
        println!();
        return;
    }

    for outcome in &report.outcomes {
        match &outcome.status {
            SegmentStatus::Succeeded => println!(
                "  ✓ {} -> {} ({})",
                outcome.label,
                outcome.output_path,
                Utils::format_duration(std::time::Duration::from_millis(outcome.elapsed_ms))
            ),
            SegmentStatus::Skipped => {
                println!("  - {} -> {} (dry run)", outcome.label, outcome.output_path);
                println!("    {}", outcome.command);
            }
            SegmentStatus::Failed { message } => {
                println!("  ✗ {} -> {}", outcome.label, outcome.output_path);
                println!("    Error: {}", message);
            }
        }
    }

    let elapsed = (report.finished_at - report.started_at)
        .to_std()
        .unwrap_or_default();
    println!(
        "{} of {} parts written in {}",
        report.succeeded_count(),
        report.outcomes.len(),
        Utils::format_duration(elapsed)
    );
    if report.dropped_windows > 0 {
        warn!(dropped = report.dropped_windows, "Windows inside the cut-out were skipped");
    }
    println!();
}

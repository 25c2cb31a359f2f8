//! Command-line argument definitions

use std::path::PathBuf;

use clap::{ArgGroup, Args};
use clap_num::number_range;

use crate::config_initialization::ConfigOverrides;

/// Upper bound for `--jobs`
pub const MAX_JOBS: usize = 64;

fn parse_jobs(s: &str) -> Result<usize, String> {
    number_range(s, 0, MAX_JOBS)
}

/// Segmentation options shared by `split` and `plan`
#[derive(Args, Debug, Clone)]
pub struct PlanOptions {
    /// Segment length in seconds (10-600)
    #[arg(short, long)]
    pub length: u32,

    /// Output aspect: 9:16 (portrait crop) or 16:9 (keep frame)
    #[arg(short, long)]
    pub aspect: String,

    /// Title shown in the overlay, followed by " - Part N"
    #[arg(short, long)]
    pub title: Option<String>,

    /// Start of the range to leave out (HH:MM:SS)
    #[arg(long, requires = "cut_end")]
    pub cut_start: Option<String>,

    /// End of the range to leave out (HH:MM:SS)
    #[arg(long, requires = "cut_start")]
    pub cut_end: Option<String>,
}

/// Configuration sources and overrides
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML configuration file (default: ./splitx.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// ffmpeg executable
    #[arg(long, global = true)]
    pub ffmpeg: Option<String>,

    /// Font file for the title overlay
    #[arg(long, global = true)]
    pub font_file: Option<String>,

    /// Horizontal pixel shift of the portrait crop
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub crop_bias: Option<i32>,

    /// Video codec
    #[arg(long, global = true)]
    pub video_codec: Option<String>,

    /// Audio codec
    #[arg(long, global = true)]
    pub audio_codec: Option<String>,

    /// Extension of written parts
    #[arg(long, global = true)]
    pub extension: Option<String>,

    /// Replace existing parts
    #[arg(long, global = true)]
    pub overwrite: bool,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            ffmpeg_path: self.ffmpeg.clone(),
            font_file: self.font_file.clone(),
            crop_bias: self.crop_bias,
            video_codec: self.video_codec.clone(),
            audio_codec: self.audio_codec.clone(),
            output_extension: self.extension.clone(),
            overwrite: self.overwrite,
        }
    }
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Video file, or directory of video files
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub plan: PlanOptions,

    /// Write parts here instead of next to each source
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Parts rendered at once (0 = one per CPU)
    #[arg(short, long, default_value = "1", value_parser = parse_jobs)]
    pub jobs: usize,

    /// Walk subdirectories when the input is a directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Print the engine commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the split report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["duration", "input"])))]
pub struct PlanArgs {
    /// Source duration in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Probe this video file for its duration
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub plan: PlanOptions,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigCommandArgs {
    /// Write the resolved configuration to this file instead of printing it
    #[arg(short, long)]
    pub write: Option<PathBuf>,
}

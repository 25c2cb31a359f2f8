//! CLI module for SplitX
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{ConfigArgs, ConfigCommandArgs, PlanArgs, PlanOptions, ProbeArgs, SplitArgs};

/// SplitX video splitter
///
/// Cuts a video into fixed-length parts, each re-encoded with a
/// "<title> - Part N" overlay and optionally cropped to 9:16.
#[derive(Parser, Debug)]
#[command(name = "splitter")]
#[command(about = "SplitX - Split videos into titled fixed-length parts")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info", global = true, env = "SPLITX_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a video (or a directory of videos) into titled parts
    Split(SplitArgs),
    /// Show the parts a split would produce
    Plan(PlanArgs),
    /// Print the duration of a video file
    Probe(ProbeArgs),
    /// Print or write the resolved configuration
    Config(ConfigCommandArgs),
}

//! SplitX video splitter
//!
//! Cuts a video into fixed-length parts and re-encodes each one with a
//! "<title> - Part N" overlay, optionally cropped to a 9:16 frame. A
//! time range can be left out of every part.
//!
//! # Usage
//!
//! ```bash
//! splitter split --input talk.mp4 --length 60 --aspect 9:16 --title "My Talk"
//! splitter split --input ./videos --length 120 --aspect 16:9 --cut-start 00:01:00 --cut-end 00:02:30
//! splitter plan --duration 125 --length 60 --aspect 16:9
//! splitter probe --input talk.mp4 --json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use splitx_cli::cli::{commands, Cli, Commands};
use splitx_cli::utils::logging::{LogFormat, LogLevel, LoggingConfig, LoggingSystem};

/// Main entry point for the SplitX CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingSystem::new(LoggingConfig {
        level: LogLevel::parse(&cli.log_level)?,
        format: if cli.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
        ..LoggingConfig::default()
    });
    logging.initialize()?;
    logging.log_system_info();

    let config = commands::load_config(&cli.config)?;

    match cli.command {
        Commands::Split(args) => {
            info!("Executing split command");
            commands::split(args, config).await?;
        }
        Commands::Plan(args) => {
            info!("Executing plan command");
            commands::plan(args, config).await?;
        }
        Commands::Probe(args) => {
            info!("Executing probe command");
            commands::probe(args, config).await?;
        }
        Commands::Config(args) => {
            info!("Executing config command");
            commands::config(args, config)?;
        }
    }

    Ok(())
}

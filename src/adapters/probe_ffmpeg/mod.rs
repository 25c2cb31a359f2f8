//! FFmpeg probe adapter
//!
//! `ffmpeg -i <file>` without an output exits non-zero but prints the input
//! description, including the `Duration:` line, on stderr. That text is what
//! the duration parser consumes.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::adapters::exec_ffmpeg::spawn_error;
use crate::domain::errors::DomainError;
use crate::ports::ProbePort;

/// FFmpeg-based probe adapter
#[derive(Debug, Clone)]
pub struct FFmpegProbeAdapter {
    program: String,
}

impl FFmpegProbeAdapter {
    /// Create new probe adapter for the given engine executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ProbePort for FFmpegProbeAdapter {
    async fn diagnostic_output(&self, file_path: &Path) -> Result<String, DomainError> {
        let output = Command::new(&self.program)
            .arg("-hide_banner")
            .arg("-i")
            .arg(file_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| spawn_error(&self.program, e))?;

        // Exit status is expected to be non-zero: no output file was given
        debug!(status = ?output.status.code(), "Probe finished");
        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

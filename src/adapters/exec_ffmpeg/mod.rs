//! FFmpeg execution adapter
//!
//! Runs one invocation as a child process and reports failure with the tail
//! of the engine's stderr.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::DomainError;
use crate::engine::FfmpegInvocation;
use crate::ports::ExecutePort;

/// Lines of engine stderr kept in failure messages
const STDERR_TAIL_LINES: usize = 5;

/// FFmpeg-based execution adapter
#[derive(Debug, Clone, Default)]
pub struct FFmpegAdapter;

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn execute(&self, invocation: &FfmpegInvocation) -> Result<(), DomainError> {
        let output = Command::new(&invocation.program)
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| spawn_error(&invocation.program, e))?;

        if output.status.success() {
            debug!(output = %invocation.output.display(), "Engine finished");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let code = output
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());

        Err(DomainError::ExternalToolFailed(format!(
            "{} exited with {} while writing {}: {}",
            invocation.program,
            code,
            invocation.output.display(),
            stderr_tail(&stderr, STDERR_TAIL_LINES)
        )))
    }
}

/// Map a spawn failure, singling out a missing executable
pub(crate) fn spawn_error(program: &str, err: std::io::Error) -> DomainError {
    if err.kind() == std::io::ErrorKind::NotFound {
        DomainError::ExternalToolFailed(format!(
            "'{}' not found; install FFmpeg or set ffmpeg_path in the config",
            program
        ))
    } else {
        DomainError::ExternalToolFailed(format!("failed to start '{}': {}", program, err))
    }
}

/// Last `lines` non-empty lines of engine output, joined with ` | `
pub(crate) fn stderr_tail(stderr: &str, lines: usize) -> String {
    let tail: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let skip = tail.len().saturating_sub(lines);
    if tail.is_empty() {
        "no diagnostic output".to_string()
    } else {
        tail[skip..].join(" | ")
    }
}

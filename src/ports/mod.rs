// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::engine::FfmpegInvocation;

/// Port for reading the engine's diagnostic description of a media file
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Raw diagnostic text (for ffmpeg: the stderr of `ffmpeg -i <file>`)
    async fn diagnostic_output(&self, file_path: &Path) -> Result<String, DomainError>;
}

/// Port for running one transcoding invocation
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run the invocation to completion; `Err` when the engine could not be
    /// started or reported failure
    async fn execute(&self, invocation: &FfmpegInvocation) -> Result<(), DomainError>;
}

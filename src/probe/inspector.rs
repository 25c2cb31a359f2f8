//! Video inspection implementation

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::ports::ProbePort;
use crate::probe::{parse_duration, DurationProbe, MediaSummary};

/// Video inspector resolving the duration of a source file
pub struct VideoInspector {
    probe: Arc<dyn ProbePort>,
}

impl VideoInspector {
    /// Create a new video inspector backed by the given probe
    pub fn new(probe: Arc<dyn ProbePort>) -> Self {
        Self { probe }
    }

    /// Inspect a video file.
    ///
    /// Fails with [`DomainError::DurationUnknown`] when the engine output has no
    /// duration line, which aborts the run for this file.
    pub async fn inspect(&self, path: &Path) -> Result<MediaSummary, DomainError> {
        info!(path = %path.display(), "Inspecting video file");

        let metadata = std::fs::metadata(path)
            .map_err(|_| DomainError::FileNotFound(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(DomainError::FileNotFound(path.display().to_string()));
        }

        let output = self.probe.diagnostic_output(path).await?;
        debug!(bytes = output.len(), "Received engine diagnostic output");

        match parse_duration(&output) {
            DurationProbe::Known(duration) => {
                info!(duration, "Resolved video duration");
                Ok(MediaSummary {
                    path: path.display().to_string(),
                    duration,
                    file_size: metadata.len(),
                })
            }
            DurationProbe::Unknown => {
                warn!(path = %path.display(), "Could not find duration in video file");
                Err(DomainError::DurationUnknown(path.display().to_string()))
            }
        }
    }
}

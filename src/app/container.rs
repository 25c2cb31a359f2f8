use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFmpegProbeAdapter};
use crate::app::split_interactor::SplitInteractor;
use crate::config_initialization::SplitterConfig;
use crate::ports::{ExecutePort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn split_interactor(&self) -> Arc<SplitInteractor>;
    fn config(&self) -> &SplitterConfig;
}

/// Wires the ffmpeg-backed adapters into the interactors
pub struct DefaultAppContainer {
    config: SplitterConfig,
    split_interactor: Arc<SplitInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: SplitterConfig) -> Self {
        let probe_port = Arc::new(FFmpegProbeAdapter::new(config.ffmpeg_path.clone()));
        let execute_port = Arc::new(FFmpegAdapter::new());
        Self::with_ports(config, probe_port, execute_port)
    }

    /// Build with caller-supplied ports
    pub fn with_ports(
        config: SplitterConfig,
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
    ) -> Self {
        let split_interactor = Arc::new(SplitInteractor::new(probe_port, execute_port, &config));
        Self {
            config,
            split_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }

    fn config(&self) -> &SplitterConfig {
        &self.config
    }
}

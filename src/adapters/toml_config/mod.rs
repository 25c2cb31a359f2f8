// TOML config adapter - Configuration files for the splitter

use std::path::Path;

use tracing::info;

use crate::config_initialization::SplitterConfig;
use crate::error::{SplitXError, SplitXResult};

/// Config file picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "splitx.toml";

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse configuration text; missing keys take their defaults
    pub fn parse(toml_content: &str) -> SplitXResult<SplitterConfig> {
        let config: SplitterConfig = toml::from_str(toml_content)?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> SplitXResult<SplitterConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| SplitXError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(config: &SplitterConfig) -> SplitXResult<String> {
        Ok(toml::to_string_pretty(config)?)
    }

    /// Write configuration, creating parent directories as needed
    pub fn save(config: &SplitterConfig, path: &Path) -> SplitXResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::to_toml_string(config)?)?;
        info!(path = %path.display(), "Configuration written");
        Ok(())
    }
}

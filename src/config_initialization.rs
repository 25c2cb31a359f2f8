//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::toml_config::{TomlConfigAdapter, DEFAULT_CONFIG_FILE};
use crate::domain::model::DEFAULT_TITLE;
use crate::engine::EncoderSettings;
use crate::error::{SplitXError, SplitXResult};
use crate::planner::FilterConfig;

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Engine executable, looked up on `PATH` when not absolute
    pub ffmpeg_path: String,
    /// Extension of written parts
    pub output_extension: String,
    /// Title used when none is given on the command line
    pub default_title: String,
    pub encoder: EncoderSettings,
    pub filter: FilterConfig,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            output_extension: "mp4".to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            encoder: EncoderSettings::default(),
            filter: FilterConfig::default(),
        }
    }
}

impl SplitterConfig {
    pub fn validate(&self) -> SplitXResult<()> {
        let invalid = |message: &str| SplitXError::Config {
            message: message.to_string(),
        };

        if self.ffmpeg_path.trim().is_empty() {
            return Err(invalid("ffmpeg_path cannot be empty"));
        }
        if self.output_extension.is_empty()
            || !self
                .output_extension
                .trim_start_matches('.')
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(invalid("output_extension must be alphanumeric, e.g. \"mp4\""));
        }
        if self.encoder.video_codec.trim().is_empty() || self.encoder.audio_codec.trim().is_empty()
        {
            return Err(invalid("encoder codecs cannot be empty"));
        }
        self.filter.validate()?;
        Ok(())
    }
}

/// Values given on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ffmpeg_path: Option<String>,
    pub font_file: Option<String>,
    pub crop_bias: Option<i32>,
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub output_extension: Option<String>,
    pub overwrite: bool,
}

/// Environment variables consulted between the file and the command line
pub const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("SPLITX_FFMPEG", "ffmpeg_path"),
    ("SPLITX_FONT_FILE", "filter.font_file"),
    ("SPLITX_CROP_BIAS", "filter.crop_bias"),
    ("SPLITX_VIDEO_CODEC", "encoder.video_codec"),
    ("SPLITX_AUDIO_CODEC", "encoder.audio_codec"),
    ("SPLITX_OUTPUT_EXTENSION", "output_extension"),
];

/// Initialize configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> SplitXResult<SplitterConfig> {
    info!("Initializing configuration hierarchy");

    let mut config = match resolve_config_file(config_file)? {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            TomlConfigAdapter::load(&path)?
        }
        None => {
            debug!("No configuration file, using defaults");
            SplitterConfig::default()
        }
    };

    let applied = apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    if applied > 0 {
        info!("Applied {} environment variable overrides", applied);
    }

    apply_cli_overrides(&mut config, overrides);
    config.validate()?;
    Ok(config)
}

/// An explicit file must exist; otherwise `splitx.toml` in the working directory is optional
fn resolve_config_file(config_file: Option<&Path>) -> SplitXResult<Option<PathBuf>> {
    match config_file {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(SplitXError::Config {
            message: format!("Config file does not exist: {}", path.display()),
        }),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            Ok(default.is_file().then_some(default))
        }
    }
}

/// Apply `SPLITX_*` variables read through `lookup`; returns how many were set
pub fn apply_env_overrides<F>(config: &mut SplitterConfig, lookup: F) -> SplitXResult<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = 0;
    for &(env_var, key) in ENV_MAPPINGS {
        let Some(value) = lookup(env_var) else {
            continue;
        };
        debug!("Found environment override: {} -> {}", env_var, key);

        match key {
            "ffmpeg_path" => config.ffmpeg_path = value,
            "filter.font_file" => config.filter.font_file = value,
            "filter.crop_bias" => {
                config.filter.crop_bias =
                    value.trim().parse().map_err(|_| SplitXError::Config {
                        message: format!("{} must be an integer, got '{}'", env_var, value),
                    })?
            }
            "encoder.video_codec" => config.encoder.video_codec = value,
            "encoder.audio_codec" => config.encoder.audio_codec = value,
            "output_extension" => config.output_extension = value,
            _ => continue,
        }
        applied += 1;
    }
    Ok(applied)
}

/// Apply command-line values on top of everything else
pub fn apply_cli_overrides(config: &mut SplitterConfig, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.ffmpeg_path {
        config.ffmpeg_path = path.clone();
    }
    if let Some(font) = &overrides.font_file {
        config.filter.font_file = font.clone();
    }
    if let Some(bias) = overrides.crop_bias {
        config.filter.crop_bias = bias;
    }
    if let Some(codec) = &overrides.video_codec {
        config.encoder.video_codec = codec.clone();
    }
    if let Some(codec) = &overrides.audio_codec {
        config.encoder.audio_codec = codec.clone();
    }
    if let Some(ext) = &overrides.output_extension {
        config.output_extension = ext.clone();
    }
    if overrides.overwrite {
        config.encoder.overwrite = true;
    }
}

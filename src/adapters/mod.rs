// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod probe_ffmpeg;
pub mod toml_config;

// Re-export adapters
pub use exec_ffmpeg::FFmpegAdapter;
pub use probe_ffmpeg::FFmpegProbeAdapter;
pub use toml_config::TomlConfigAdapter;

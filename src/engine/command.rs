//! FFmpeg invocation descriptors

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::model::SegmentPlan;
use crate::engine::EncoderSettings;
use crate::error::SplitXResult;
use crate::utils::path::derive_output_path;
use crate::utils::time::format_seconds;

/// Everything needed to render one segment with the external engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FfmpegInvocation {
    /// Engine executable
    pub program: String,
    pub source: PathBuf,
    pub output: PathBuf,
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds
    pub end: f64,
    pub filter_chain: String,
    pub encoder: EncoderSettings,
}

impl FfmpegInvocation {
    /// Engine arguments in order: input, filters, range, codecs, output
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            self.source.display().to_string(),
            "-vf".to_string(),
            self.filter_chain.clone(),
            "-ss".to_string(),
            format_seconds(self.start),
            "-to".to_string(),
            format_seconds(self.end),
            "-c:v".to_string(),
            self.encoder.video_codec.clone(),
            "-c:a".to_string(),
            self.encoder.audio_codec.clone(),
        ];

        if self.encoder.strict_experimental {
            args.push("-strict".to_string());
            args.push("experimental".to_string());
        }

        // Never let the engine stop to ask about an existing file
        args.push(if self.encoder.overwrite { "-y" } else { "-n" }.to_string());
        args.push(self.output.display().to_string());
        args
    }

    /// Printable command line, arguments with spaces quoted
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args())
            .map(|arg| {
                if arg.contains(char::is_whitespace) {
                    format!("\"{}\"", arg)
                } else {
                    arg
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for FfmpegInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Builds invocations for the segments of one source file
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
    program: String,
    encoder: EncoderSettings,
    output_dir: Option<PathBuf>,
    extension: String,
}

impl InvocationBuilder {
    pub fn new(program: impl Into<String>, encoder: EncoderSettings) -> Self {
        Self {
            program: program.into(),
            encoder,
            output_dir: None,
            extension: "mp4".to_string(),
        }
    }

    /// Write parts here instead of next to the source
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn build(&self, source: &Path, plan: &SegmentPlan) -> SplitXResult<FfmpegInvocation> {
        let output = derive_output_path(
            source,
            &plan.file_label(),
            self.output_dir.as_deref(),
            &self.extension,
        )?;

        Ok(FfmpegInvocation {
            program: self.program.clone(),
            source: source.to_path_buf(),
            output,
            start: plan.range.start,
            end: plan.range.end,
            filter_chain: plan.filter_chain.clone(),
            encoder: self.encoder.clone(),
        })
    }
}

//! Filter-chain construction for the title overlay and portrait crop

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::AspectMode;

/// Default font handed to `drawtext`
pub const DEFAULT_FONT_FILE: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Geometry of the title box and text for one aspect mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Top edge of the box in pixels
    pub box_y: u32,
    /// Box height in pixels
    pub box_height: u32,
    /// Box colour name understood by the engine
    pub box_color: String,
    /// Box opacity, 0.0 (invisible) to 1.0 (solid)
    pub box_opacity: f64,
    /// Text baseline offset from the top of the frame
    pub text_y: u32,
    pub font_size: u32,
    pub font_color: String,
}

impl OverlayStyle {
    /// Box lowered a little to clear the top of a vertical frame
    pub fn portrait() -> Self {
        Self {
            box_y: 80,
            box_height: 120,
            box_color: "black".to_string(),
            box_opacity: 0.5,
            text_y: 120,
            font_size: 30,
            font_color: "white".to_string(),
        }
    }

    pub fn landscape() -> Self {
        Self {
            box_y: 20,
            box_height: 100,
            box_color: "black".to_string(),
            box_opacity: 0.5,
            text_y: 50,
            font_size: 30,
            font_color: "white".to_string(),
        }
    }

    fn validate(&self, section: &str) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.box_opacity) {
            return Err(DomainError::BadArgs(format!(
                "{}.box_opacity must be between 0.0 and 1.0, got {}",
                section, self.box_opacity
            )));
        }
        if self.box_height == 0 {
            return Err(DomainError::BadArgs(format!(
                "{}.box_height must be positive",
                section
            )));
        }
        if self.font_size == 0 {
            return Err(DomainError::BadArgs(format!(
                "{}.font_size must be positive",
                section
            )));
        }
        if self.box_color.trim().is_empty() || self.font_color.trim().is_empty() {
            return Err(DomainError::BadArgs(format!(
                "{} colours cannot be empty",
                section
            )));
        }
        Ok(())
    }
}

/// Presentation constants for the filter chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Font file for `drawtext`; empty leaves the choice to the engine
    #[serde(default = "default_font_file")]
    pub font_file: String,
    /// Horizontal pixel shift applied to the centered portrait crop
    #[serde(default)]
    pub crop_bias: i32,
    #[serde(default = "OverlayStyle::portrait")]
    pub portrait: OverlayStyle,
    #[serde(default = "OverlayStyle::landscape")]
    pub landscape: OverlayStyle,
}

fn default_font_file() -> String {
    DEFAULT_FONT_FILE.to_string()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            font_file: default_font_file(),
            crop_bias: 0,
            portrait: OverlayStyle::portrait(),
            landscape: OverlayStyle::landscape(),
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.font_file.is_empty() && self.font_file.trim().is_empty() {
            return Err(DomainError::BadArgs(
                "font_file cannot be blank; leave it empty for the engine default".to_string(),
            ));
        }
        self.portrait.validate("portrait")?;
        self.landscape.validate("landscape")
    }

    pub fn overlay_for(&self, aspect: AspectMode) -> &OverlayStyle {
        match aspect {
            AspectMode::Portrait => &self.portrait,
            AspectMode::Landscape => &self.landscape,
        }
    }
}

/// Builds the `-vf` argument for one segment
pub struct FilterChainBuilder<'a> {
    config: &'a FilterConfig,
}

impl<'a> FilterChainBuilder<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    /// Crop (portrait only) followed by the title box and centered title text
    pub fn build(&self, aspect: AspectMode, title: &str) -> String {
        let overlay = self.overlay_descriptor(self.config.overlay_for(aspect), title);
        match aspect {
            AspectMode::Portrait => format!("{},{}", self.crop_descriptor(), overlay),
            AspectMode::Landscape => overlay,
        }
    }

    /// Select a full-height 9:16 region, centered and shifted by `crop_bias`
    pub fn crop_descriptor(&self) -> String {
        let x = match self.config.crop_bias {
            0 => "(iw-ih*9/16)/2".to_string(),
            bias if bias > 0 => format!("(iw-ih*9/16)/2+{}", bias),
            bias => format!("(iw-ih*9/16)/2-{}", bias.unsigned_abs()),
        };
        format!("crop=ih*9/16:ih:{}:0", x)
    }

    fn overlay_descriptor(&self, style: &OverlayStyle, title: &str) -> String {
        let font = match self.config.font_file.as_str() {
            "" => String::new(),
            path => format!("fontfile={}:", escape_font_path(path)),
        };

        format!(
            "drawbox=x=0:y={}:w=iw:h={}:color={}@{}:t=fill,\
             drawtext={}text='{}':x=(w-text_w)/2:y={}:fontcolor={}:fontsize={}",
            style.box_y,
            style.box_height,
            style.box_color,
            style.box_opacity,
            font,
            escape_title(title),
            style.text_y,
            style.font_color,
            style.font_size,
        )
    }
}

/// Make a title safe inside the single-quoted `text='...'` value.
///
/// A straight quote would close the value early, so it becomes a typographic
/// apostrophe. `\`, `:` and `%` are backslash-escaped so the option parser and
/// drawtext's `%{...}` expansion take them literally. Line breaks become spaces.
pub fn escape_title(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len() + 8);
    for ch in title.chars() {
        match ch {
            '\'' => escaped.push('\u{2019}'),
            '\\' => escaped.push_str("\\\\"),
            ':' => escaped.push_str("\\:"),
            '%' => escaped.push_str("\\%"),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a font path for the unquoted `fontfile=` option.
///
/// Windows separators become `/`; filter-graph delimiters are backslash-escaped.
pub fn escape_font_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let mut escaped = String::with_capacity(normalized.len() + 8);
    for ch in normalized.chars() {
        match ch {
            ':' => escaped.push_str("\\:"),
            '\'' => escaped.push_str("\\'"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '[' => escaped.push_str("\\["),
            ']' => escaped.push_str("\\]"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

//! Transformation option types
//!
//! Typed counterpart of the loosely-keyed options object the rendering
//! layer passes in: five recognized fields, all optional, with default
//! resolution centralized in `Default` instead of scattered at call sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{QUALITY_MAX, QUALITY_MIN};
use crate::error::TransformError;
use crate::transform::directive::Directive;

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// WebP, the default delivery format
    #[default]
    WebP,
    Jpeg,
    Png,
    Avif,
    /// Let the media host negotiate the format with the client
    Auto,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebP => "webp",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Avif => "avif",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "webp" => Ok(OutputFormat::WebP),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "avif" => Ok(OutputFormat::Avif),
            "auto" => Ok(OutputFormat::Auto),
            _ => Err(TransformError::invalid_param(
                "format",
                format!("unknown format: {}", s),
            )),
        }
    }
}

/// How the media host fits the image into the target dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropMode {
    /// Crop to fill target dimensions (default)
    #[default]
    Fill,
    /// Scale to fit within dimensions, preserving aspect ratio
    Fit,
    /// Stretch to fill exactly (may distort)
    Scale,
    /// Extract a region of exactly the requested size
    Crop,
    /// Fill with content-aware gravity, for small previews
    Thumb,
    /// Like fit, but never scale up
    Limit,
    /// Add padding to fill dimensions
    Pad,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Fit => "fit",
            Self::Scale => "scale",
            Self::Crop => "crop",
            Self::Thumb => "thumb",
            Self::Limit => "limit",
            Self::Pad => "pad",
        }
    }
}

impl FromStr for CropMode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fill" => Ok(CropMode::Fill),
            "fit" => Ok(CropMode::Fit),
            "scale" => Ok(CropMode::Scale),
            "crop" => Ok(CropMode::Crop),
            "thumb" => Ok(CropMode::Thumb),
            "limit" => Ok(CropMode::Limit),
            "pad" => Ok(CropMode::Pad),
            _ => Err(TransformError::invalid_param(
                "crop",
                format!("unknown crop mode: {}", s),
            )),
        }
    }
}

/// Delivery quality: host-selected or a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    /// Let the media host pick a quality level (default)
    #[default]
    Auto,
    /// Fixed quality, 1-100
    Fixed(u8),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Auto => write!(f, "auto"),
            Quality::Fixed(q) => write!(f, "{}", q),
        }
    }
}

impl FromStr for Quality {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Quality::Auto);
        }
        let quality: u8 = s
            .parse()
            .map_err(|_| TransformError::invalid_param("quality", "must be 'auto' or 1-100"))?;
        if !(QUALITY_MIN..=QUALITY_MAX).contains(&quality) {
            return Err(TransformError::invalid_param(
                "quality",
                format!("quality {} out of range 1-100", quality),
            ));
        }
        Ok(Quality::Fixed(quality))
    }
}

/// Transformation option set
///
/// Defaults are deliberately asymmetric: `width` and `height` stay unset
/// until a caller supplies them, while `crop`, `format` and `quality` are
/// always populated. Downstream URLs rely on this shape (`{}` renders as
/// `c_fill,f_webp,q_auto`), so clearing one of the populated fields is an
/// explicit act: set it to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Target width in pixels; omitted from the segment when `None`
    pub width: Option<u32>,
    /// Target height in pixels; omitted from the segment when `None`
    pub height: Option<u32>,
    /// Crop mode
    pub crop: Option<CropMode>,
    /// Output format
    pub format: Option<OutputFormat>,
    /// Delivery quality
    pub quality: Option<Quality>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            crop: Some(CropMode::Fill),
            format: Some(OutputFormat::WebP),
            quality: Some(Quality::Auto),
        }
    }
}

impl TransformOptions {
    /// Fixed dimensions plus the standard defaults. Used by the preset table.
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            crop: Some(CropMode::Fill),
            format: Some(OutputFormat::WebP),
            quality: Some(Quality::Auto),
        }
    }

    /// An option set with every directive cleared.
    ///
    /// Rewriting with this still inserts the (empty) segment slot, so the
    /// result carries a doubled slash after `/upload/`.
    pub const fn empty() -> Self {
        Self {
            width: None,
            height: None,
            crop: None,
            format: None,
            quality: None,
        }
    }

    /// Ordered directive sequence: width, height, crop, format, quality
    pub fn directives(&self) -> Vec<Directive> {
        let mut directives = Vec::with_capacity(5);

        if let Some(width) = self.width {
            directives.push(Directive::new("w", width.to_string()));
        }
        if let Some(height) = self.height {
            directives.push(Directive::new("h", height.to_string()));
        }
        if let Some(crop) = self.crop {
            directives.push(Directive::new("c", crop.as_str()));
        }
        if let Some(format) = self.format {
            directives.push(Directive::new("f", format.as_str()));
        }
        if let Some(quality) = self.quality {
            directives.push(Directive::new("q", quality.to_string()));
        }

        directives
    }

    /// Comma-joined transformation segment; empty when no directives apply
    pub fn segment(&self) -> String {
        let parts: Vec<String> = self.directives().iter().map(ToString::to_string).collect();
        parts.join(",")
    }

    /// Check if any directive would be emitted
    pub fn has_directives(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.crop.is_some()
            || self.format.is_some()
            || self.quality.is_some()
    }
}

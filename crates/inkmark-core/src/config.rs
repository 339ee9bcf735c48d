//! Watermark configuration
//!
//! `WatermarkConfig` is a plain value object: it is constructed by a settings
//! form (or loaded by a settings store), held in memory for the duration of a
//! preview session, and passed into each compositing call. Persistence lives
//! in `inkmark-settings`, never here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anchor for logo placement on the base image.
///
/// Corner anchors keep a fixed margin from the relevant edges; `Center`
/// centers the logo on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

#[derive(Debug, Error)]
#[error("Invalid watermark position: {0}")]
pub struct ParsePositionError(String);

impl WatermarkPosition {
    /// Parse a position from its persisted kebab-case form.
    pub fn parse(s: &str) -> Result<Self, ParsePositionError> {
        match s.to_lowercase().as_str() {
            "top-left" => Ok(WatermarkPosition::TopLeft),
            "top-right" => Ok(WatermarkPosition::TopRight),
            "bottom-left" => Ok(WatermarkPosition::BottomLeft),
            "bottom-right" => Ok(WatermarkPosition::BottomRight),
            "center" => Ok(WatermarkPosition::Center),
            _ => Err(ParsePositionError(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "top-left",
            WatermarkPosition::TopRight => "top-right",
            WatermarkPosition::BottomLeft => "bottom-left",
            WatermarkPosition::BottomRight => "bottom-right",
            WatermarkPosition::Center => "center",
        }
    }
}

/// Watermark configuration, immutable per compositing call.
///
/// Out-of-range `opacity` or `size_percent` values are deliberately not
/// rejected here: the compositor produces a best-effort result so an
/// interactive preview stays responsive while sliders are being dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// When false, compositing is an identity passthrough.
    pub enabled: bool,
    /// Reference to the logo image (storage key or URL). `None` or empty
    /// means no logo is configured and compositing passes through.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Alpha multiplier applied to the logo layer, nominally in [0, 1].
    pub opacity: f32,
    pub position: WatermarkPosition,
    /// Logo width as a percentage of the base image width, nominally (0, 100].
    pub size_percent: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        WatermarkConfig {
            enabled: true,
            logo_url: None,
            opacity: 0.5,
            position: WatermarkPosition::BottomRight,
            size_percent: 30.0,
        }
    }
}

impl WatermarkConfig {
    /// Whether a logo source is configured at all.
    pub fn has_logo(&self) -> bool {
        self.logo_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

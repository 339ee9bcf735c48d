//! Shared constants

/// Fixed pixel margin between a corner-anchored logo and the base image edge.
pub const WATERMARK_MARGIN_PX: f32 = 20.0;

/// JPEG quality used when encoding watermarked previews.
///
/// Matches the fixed high-quality lossy setting the studio's preview has
/// always used.
pub const PREVIEW_JPEG_QUALITY: u8 = 92;

/// File name the local settings store persists the watermark config under.
pub const SETTINGS_FILE_NAME: &str = "watermark.json";

/// Directory the local settings store keeps uploaded logos in.
pub const LOGO_DIR_NAME: &str = "logos";

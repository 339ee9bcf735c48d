//! Bytes-in/bytes-out watermarking pipeline
//!
//! `WatermarkPreview` is the entry point preview surfaces call: it decodes
//! the base and logo bytes, composites through the raster backend, and
//! encodes the result for display or storage.

use crate::compositor::WatermarkCompositor;
use crate::encode::{self, OutputFormat};
use crate::raster::RasterRenderer;
use crate::renderer::{RenderResult, Renderer};
use bytes::Bytes;
use inkmark_core::WatermarkConfig;

pub struct WatermarkPreview;

impl WatermarkPreview {
    /// Watermark `base` with `logo` and encode the result.
    /// Returns `(encoded_bytes, content_type)`.
    ///
    /// When the config is disabled or no logo bytes are supplied, the input
    /// bytes are returned untouched: the passthrough is byte-identical, not
    /// a re-encode.
    pub fn render(
        base: &[u8],
        logo: Option<&[u8]>,
        config: &WatermarkConfig,
        format: OutputFormat,
    ) -> RenderResult<(Bytes, String)> {
        let logo = match logo {
            Some(data) if config.enabled => data,
            _ => {
                tracing::debug!(
                    enabled = config.enabled,
                    has_logo = logo.is_some(),
                    "Watermarking skipped, passing image through"
                );
                return Ok((Bytes::copy_from_slice(base), sniff_content_type(base)));
            }
        };

        let compositor = WatermarkCompositor::new(RasterRenderer);
        let base_img = compositor.renderer().decode(base)?;
        let logo_img = compositor.renderer().decode(logo)?;

        let surface = compositor.composite(&base_img, Some(&logo_img), config)?;
        let encoded = compositor.renderer().encode(&surface, format)?;

        Ok((encoded, format.to_mime_type().to_string()))
    }

    /// Watermark and wrap as a `data:` URI for direct display.
    pub fn render_data_uri(
        base: &[u8],
        logo: Option<&[u8]>,
        config: &WatermarkConfig,
        format: OutputFormat,
    ) -> RenderResult<String> {
        let (encoded, _) = Self::render(base, logo, config, format)?;
        Ok(encode::to_data_uri(&encoded, format))
    }
}

/// Best-effort content type for passthrough bytes. The passthrough path
/// never decodes, so an unrecognized header is not an error here.
fn sniff_content_type(data: &[u8]) -> String {
    image::guess_format(data)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| "application/octet-stream".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RenderError;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use inkmark_core::WatermarkPosition;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn enabled_config() -> WatermarkConfig {
        WatermarkConfig {
            enabled: true,
            logo_url: Some("logos/mark.png".to_string()),
            opacity: 0.5,
            position: WatermarkPosition::BottomRight,
            size_percent: 30.0,
        }
    }

    #[test]
    fn test_disabled_passthrough_is_byte_identical() {
        let base = png_bytes(40, 40, [255, 255, 255, 255]);
        let logo = png_bytes(10, 10, [0, 0, 0, 255]);
        let config = WatermarkConfig {
            enabled: false,
            ..enabled_config()
        };

        let (out, content_type) =
            WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Jpeg).unwrap();
        assert_eq!(out.as_ref(), base.as_slice());
        assert_eq!(content_type, "image/png");
    }

    #[test]
    fn test_missing_logo_passthrough() {
        let base = png_bytes(40, 40, [255, 255, 255, 255]);
        let (out, _) =
            WatermarkPreview::render(&base, None, &enabled_config(), OutputFormat::Jpeg).unwrap();
        assert_eq!(out.as_ref(), base.as_slice());
    }

    #[test]
    fn test_render_produces_requested_format() {
        let base = png_bytes(60, 60, [255, 255, 255, 255]);
        let logo = png_bytes(12, 12, [0, 0, 0, 255]);

        let (jpeg, content_type) =
            WatermarkPreview::render(&base, Some(&logo), &enabled_config(), OutputFormat::Jpeg)
                .unwrap();
        assert_eq!(content_type, "image/jpeg");
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let (png, content_type) =
            WatermarkPreview::render(&base, Some(&logo), &enabled_config(), OutputFormat::Png)
                .unwrap();
        assert_eq!(content_type, "image/png");
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_render_deterministic() {
        let base = png_bytes(60, 60, [200, 180, 160, 255]);
        let logo = png_bytes(12, 12, [0, 0, 0, 255]);
        let config = enabled_config();

        let (first, _) =
            WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Jpeg).unwrap();
        let (second, _) =
            WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Jpeg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_rejects_undecodable_base() {
        let logo = png_bytes(12, 12, [0, 0, 0, 255]);
        let err = WatermarkPreview::render(
            b"definitely not pixels",
            Some(&logo),
            &enabled_config(),
            OutputFormat::Jpeg,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::ImageDecode(_)));
    }

    #[test]
    fn test_render_data_uri_shape() {
        let base = png_bytes(30, 30, [255, 255, 255, 255]);
        let logo = png_bytes(10, 10, [0, 0, 0, 255]);

        let uri =
            WatermarkPreview::render_data_uri(&base, Some(&logo), &enabled_config(), OutputFormat::Jpeg)
                .unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }
}

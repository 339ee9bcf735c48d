//! Headless raster backend built on the `image` crate

use crate::encode::OutputFormat;
use crate::renderer::{Rect, RenderError, RenderResult, Renderer};
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use inkmark_core::constants::PREVIEW_JPEG_QUALITY;
use std::io::Cursor;

/// Raster renderer backed by in-memory RGBA buffers
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterRenderer;

impl RasterRenderer {
    /// Select resampling filter based on the scale ratio. Strong downscales
    /// tolerate cheaper filters; near-1:1 scales get Lanczos3.
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> image::imageops::FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            image::imageops::FilterType::Triangle
        } else if max_ratio > 1.5 {
            image::imageops::FilterType::CatmullRom
        } else {
            image::imageops::FilterType::Lanczos3
        }
    }
}

impl Renderer for RasterRenderer {
    type Image = DynamicImage;
    type Surface = RgbaImage;

    fn decode(&self, data: &[u8]) -> RenderResult<DynamicImage> {
        let cursor = Cursor::new(data);
        image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?
            .decode()
            .map_err(|e| RenderError::ImageDecode(e.to_string()))
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        image.dimensions()
    }

    fn create_surface(&self, width: u32, height: u32) -> RenderResult<RgbaImage> {
        if width == 0 || height == 0 {
            return Err(RenderError::RenderSurface { width, height });
        }
        Ok(RgbaImage::new(width, height))
    }

    fn draw(&self, surface: &mut RgbaImage, image: &DynamicImage) {
        imageops::replace(surface, &image.to_rgba8(), 0, 0);
    }

    fn draw_scaled_with_alpha(
        &self,
        surface: &mut RgbaImage,
        image: &DynamicImage,
        rect: Rect,
        alpha: f32,
    ) {
        let (width, height) = image.dimensions();

        let mut layer = if width != rect.width || height != rect.height {
            let filter = Self::select_filter(width, height, rect.width, rect.height);
            image.resize_exact(rect.width, rect.height, filter).to_rgba8()
        } else {
            image.to_rgba8()
        };

        // The multiplier is clamped so the u8 alpha channel cannot wrap;
        // out-of-range config values are best-effort, not errors.
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha < 1.0 {
            for pixel in layer.pixels_mut() {
                pixel[3] = (pixel[3] as f32 * alpha).round() as u8;
            }
        }

        imageops::overlay(surface, &layer, rect.x, rect.y);
    }

    fn encode(&self, surface: &RgbaImage, format: OutputFormat) -> RenderResult<Bytes> {
        let estimated_size = (surface.width() * surface.height() * 3) as usize;
        let mut buffer = Vec::with_capacity(estimated_size);
        let mut cursor = Cursor::new(&mut buffer);

        match format {
            OutputFormat::Jpeg => {
                // JPEG has no alpha channel
                let rgb = DynamicImage::ImageRgba8(surface.clone()).to_rgb8();
                let encoder = JpegEncoder::new_with_quality(&mut cursor, PREVIEW_JPEG_QUALITY);
                rgb.write_with_encoder(encoder)
                    .map_err(|e| RenderError::Encode(e.to_string()))?;
            }
            OutputFormat::Png => {
                surface
                    .write_to(&mut cursor, ImageFormat::Png)
                    .map_err(|e| RenderError::Encode(e.to_string()))?;
            }
        }

        Ok(Bytes::from(buffer))
    }
}

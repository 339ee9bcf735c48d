//! Renderer abstraction
//!
//! This module defines the capability trait the compositor draws through.
//! Keeping the algorithm behind this seam means it does not care whether the
//! backend is a headless raster library or a UI-bound canvas equivalent.

use crate::encode::OutputFormat;
use bytes::Bytes;
use thiserror::Error;

/// Rendering operation errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("Failed to allocate {width}x{height} render surface")]
    RenderSurface { width: u32, height: u32 },

    #[error("Failed to encode output image: {0}")]
    Encode(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Target rectangle for a scaled draw.
///
/// Offsets are signed: a draw may begin off-canvas and is clipped at the
/// surface edge rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Drawing backend the compositor runs against.
///
/// Implementations own image decoding, surface allocation, scaled
/// alpha-blended draws, and encoding of the finished surface. All operations
/// are synchronous and side-effect-free; backends bound to a single-threaded
/// drawing context must serialize calls themselves.
pub trait Renderer {
    type Image;
    type Surface;

    /// Decode raw bytes into pixel data.
    fn decode(&self, data: &[u8]) -> RenderResult<Self::Image>;

    /// Pixel dimensions of a decoded image.
    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    /// Allocate a drawing surface. Fails for non-positive dimensions.
    fn create_surface(&self, width: u32, height: u32) -> RenderResult<Self::Surface>;

    /// Draw `image` opaque at the origin, filling the surface exactly.
    fn draw(&self, surface: &mut Self::Surface, image: &Self::Image);

    /// Draw `image` scaled to `rect` with a uniform alpha multiplier applied
    /// to every pixel of the drawn layer. The source image is not mutated.
    fn draw_scaled_with_alpha(
        &self,
        surface: &mut Self::Surface,
        image: &Self::Image,
        rect: Rect,
        alpha: f32,
    );

    /// Encode the surface into the requested output format.
    fn encode(&self, surface: &Self::Surface, format: OutputFormat) -> RenderResult<Bytes>;
}

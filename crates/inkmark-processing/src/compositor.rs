//! Watermark compositor
//!
//! Pure, single-shot transformation: (base image, logo image, config) to a
//! new surface with the logo alpha-blended onto the base. No internal state,
//! no I/O; image acquisition and persistence belong to the caller.

use crate::renderer::{Rect, RenderResult, Renderer};
use inkmark_core::constants::WATERMARK_MARGIN_PX;
use inkmark_core::{WatermarkConfig, WatermarkPosition};

/// Compute where the logo lands on the base image.
///
/// The logo width is `size_percent` of the base width; the height follows
/// from the logo's native aspect ratio. Corner anchors sit a fixed margin
/// from the relevant edges. Placement is deliberately not clamped: a large
/// `size_percent` can push the rectangle partially or fully off-canvas, and
/// the draw clips there instead of failing. The only floor is 1 px on the
/// scaled dimensions so the resize itself is well-defined.
pub fn placement(
    base_dims: (u32, u32),
    logo_dims: (u32, u32),
    config: &WatermarkConfig,
) -> Rect {
    let (base_w, base_h) = (base_dims.0 as f32, base_dims.1 as f32);
    let (native_w, native_h) = (logo_dims.0 as f32, logo_dims.1 as f32);

    let logo_w = base_w * config.size_percent / 100.0;
    let logo_h = native_h * (logo_w / native_w);

    let m = WATERMARK_MARGIN_PX;
    let (x, y) = match config.position {
        WatermarkPosition::TopLeft => (m, m),
        WatermarkPosition::TopRight => (base_w - logo_w - m, m),
        WatermarkPosition::BottomLeft => (m, base_h - logo_h - m),
        WatermarkPosition::BottomRight => (base_w - logo_w - m, base_h - logo_h - m),
        WatermarkPosition::Center => ((base_w - logo_w) / 2.0, (base_h - logo_h) / 2.0),
    };

    Rect {
        x: x.round() as i64,
        y: y.round() as i64,
        width: logo_w.round().max(1.0) as u32,
        height: logo_h.round().max(1.0) as u32,
    }
}

/// Watermark compositor, generic over the drawing backend
pub struct WatermarkCompositor<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> WatermarkCompositor<R> {
    pub fn new(renderer: R) -> Self {
        WatermarkCompositor { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Composite the logo onto the base image.
    ///
    /// When the config is disabled or no logo is supplied, the result is the
    /// base image redrawn unchanged (identity passthrough, not an error).
    /// Inputs are never mutated and the result is deterministic for
    /// identical inputs.
    pub fn composite(
        &self,
        base: &R::Image,
        logo: Option<&R::Image>,
        config: &WatermarkConfig,
    ) -> RenderResult<R::Surface> {
        let (base_w, base_h) = self.renderer.dimensions(base);
        let mut surface = self.renderer.create_surface(base_w, base_h)?;
        self.renderer.draw(&mut surface, base);

        if !config.enabled {
            return Ok(surface);
        }
        let Some(logo) = logo else {
            return Ok(surface);
        };

        let rect = placement((base_w, base_h), self.renderer.dimensions(logo), config);
        tracing::debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            opacity = config.opacity,
            position = config.position.as_str(),
            "Applying watermark"
        );
        self.renderer
            .draw_scaled_with_alpha(&mut surface, logo, rect, config.opacity);

        Ok(surface)
    }
}

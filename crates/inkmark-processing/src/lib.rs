//! Image watermarking for portfolio previews
//!
//! This crate implements the watermark compositor: given a base image, a logo
//! image and a [`WatermarkConfig`](inkmark_core::WatermarkConfig), it produces
//! a new image with the logo alpha-blended onto the base at a computed
//! position and size.
//!
//! The compositing algorithm is written against the [`Renderer`] capability
//! trait so it stays portable across drawing backends; [`RasterRenderer`] is
//! the headless backend built on the `image` crate. [`WatermarkPreview`] is
//! the bytes-in/bytes-out entry point used by preview surfaces.

pub mod compositor;
pub mod encode;
pub mod preview;
pub mod raster;
pub mod renderer;

pub use compositor::{placement, WatermarkCompositor};
pub use encode::OutputFormat;
pub use preview::WatermarkPreview;
pub use raster::RasterRenderer;
pub use renderer::{Rect, RenderError, RenderResult, Renderer};

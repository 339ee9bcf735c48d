//! Inkmark Core Library
//!
//! This crate provides the domain model shared across all Inkmark components:
//! the watermark configuration value object and shared constants.

pub mod config;
pub mod constants;

// Re-export commonly used types
pub use config::{ParsePositionError, WatermarkConfig, WatermarkPosition};

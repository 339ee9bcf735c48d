//! Watermark settings persistence
//!
//! The compositor in `inkmark-processing` takes a `WatermarkConfig` by value
//! and never touches storage. This crate is the settings-repository
//! collaborator behind it: a `SettingsStore` trait for loading and saving the
//! config plus the studio's logo bytes, and a local-filesystem
//! implementation.

pub mod local;
pub mod traits;

pub use local::LocalSettingsStore;
pub use traits::{SettingsError, SettingsResult, SettingsStore};

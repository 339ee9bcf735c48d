//! Settings store abstraction
//!
//! This module defines the trait all settings backends must implement.

use async_trait::async_trait;
use inkmark_core::WatermarkConfig;
use thiserror::Error;

/// Settings store operation errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings not found: {0}")]
    NotFound(String),

    #[error("Invalid logo key: {0}")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings store abstraction
///
/// Backends persist the watermark configuration and the uploaded logo image.
/// The compositor never calls this trait; callers load the config and logo
/// bytes up front and pass them into each compositing call.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the persisted watermark config, or `None` if never saved.
    async fn load(&self) -> SettingsResult<Option<WatermarkConfig>>;

    /// Persist the watermark config, replacing any previous version.
    async fn save(&self, config: &WatermarkConfig) -> SettingsResult<()>;

    /// Store logo image bytes and return the key to reference them by
    /// (suitable for `WatermarkConfig::logo_url`).
    async fn store_logo(&self, filename: &str, data: Vec<u8>) -> SettingsResult<String>;

    /// Load logo image bytes by their key.
    async fn load_logo(&self, key: &str) -> SettingsResult<Vec<u8>>;
}

use crate::traits::{SettingsError, SettingsResult, SettingsStore};
use async_trait::async_trait;
use inkmark_core::constants::{LOGO_DIR_NAME, SETTINGS_FILE_NAME};
use inkmark_core::WatermarkConfig;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Local filesystem settings store
///
/// Layout under the base directory:
/// - `watermark.json` — the serialized `WatermarkConfig`
/// - `logos/<uuid>.<ext>` — uploaded logo images
#[derive(Clone)]
pub struct LocalSettingsStore {
    base_path: PathBuf,
}

impl LocalSettingsStore {
    /// Create a new store rooted at `base_path`, creating the directory
    /// tree if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(base_path.join(LOGO_DIR_NAME)).await?;
        Ok(LocalSettingsStore { base_path })
    }

    fn settings_path(&self) -> PathBuf {
        self.base_path.join(SETTINGS_FILE_NAME)
    }

    /// Convert a logo key to a filesystem path, rejecting keys that could
    /// escape the base directory.
    fn key_to_path(&self, key: &str) -> SettingsResult<PathBuf> {
        if key.contains("..") || key.starts_with('/') {
            return Err(SettingsError::InvalidKey(
                "Logo key contains invalid characters".to_string(),
            ));
        }
        let logo_prefix = format!("{}/", LOGO_DIR_NAME);
        if !key.starts_with(&logo_prefix) || Path::new(key).components().count() != 2 {
            return Err(SettingsError::InvalidKey(format!(
                "Logo key must have the form {}/<filename>",
                LOGO_DIR_NAME
            )));
        }
        Ok(self.base_path.join(key))
    }

    /// Generate a storage key for an uploaded logo, keeping the original
    /// extension so content sniffing stays unnecessary for serving.
    fn generate_key(filename: &str) -> String {
        let id = Uuid::new_v4();
        match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}/{}.{}", LOGO_DIR_NAME, id, ext),
            None => format!("{}/{}", LOGO_DIR_NAME, id),
        }
    }
}

#[async_trait]
impl SettingsStore for LocalSettingsStore {
    async fn load(&self) -> SettingsResult<Option<WatermarkConfig>> {
        match fs::read(self.settings_path()).await {
            Ok(data) => {
                let config = serde_json::from_slice(&data)?;
                Ok(Some(config))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, config: &WatermarkConfig) -> SettingsResult<()> {
        let data = serde_json::to_vec_pretty(config)?;
        fs::write(self.settings_path(), data).await?;
        tracing::debug!(
            enabled = config.enabled,
            position = config.position.as_str(),
            "Saved watermark settings"
        );
        Ok(())
    }

    async fn store_logo(&self, filename: &str, data: Vec<u8>) -> SettingsResult<String> {
        let key = Self::generate_key(filename);
        let path = self.key_to_path(&key)?;
        fs::write(&path, data).await?;
        tracing::debug!(key = %key, "Stored watermark logo");
        Ok(key)
    }

    async fn load_logo(&self, key: &str) -> SettingsResult<Vec<u8>> {
        let path = self.key_to_path(key)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SettingsError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

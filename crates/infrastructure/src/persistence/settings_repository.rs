//! User settings persistence.
//!
//! Stores user settings in the platform-specific config directory:
//! - Linux: ~/.config/hellorest/settings.json
//! - macOS: ~/Library/Application Support/hellorest/settings.json
//! - Windows: %APPDATA%/hellorest/settings.json

use std::path::{Path, PathBuf};

use hellorest_domain::AppSettings;
use tokio::fs;
use tracing::debug;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for user settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Repository over the platform settings file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join("hellorest").join("settings.json")),
        }
    }

    /// Repository over an explicit settings file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The settings file, if a config directory is known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads user settings.
    ///
    /// Returns default settings if there is no config directory or no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<AppSettings, SettingsError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(AppSettings::default());
        };

        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(AppSettings::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(from_json_bytes(&content)?)
    }

    /// Saves user settings, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no config directory, or if serialization
    /// or the write fails.
    pub async fn save(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        let path = self.path.as_deref().ok_or(SettingsError::NoConfigDir)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        fs::write(path, to_json_stable_bytes(settings)?).await?;
        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn default_path_is_under_hellorest() {
        if let Some(p) = SettingsRepository::new().path() {
            assert!(p.ends_with("hellorest/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempdir().expect("temp dir");
        let settings = SettingsRepository::at(dir.path().join("settings.json"))
            .load()
            .await
            .expect("load");
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempdir().expect("temp dir");
        let repo = SettingsRepository::at(dir.path().join("conf/settings.json"));
        let settings = AppSettings {
            collections_root: Some(PathBuf::from("/srv/requests")),
            request_timeout_ms: 5_000,
        };

        repo.save(&settings).await.expect("save");
        assert_eq!(repo.load().await.expect("load"), settings);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ nope").expect("seed");

        let result = SettingsRepository::at(path).load().await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[tokio::test]
    async fn without_config_dir_load_defaults_and_save_fails() {
        let repo = SettingsRepository { path: None };
        assert_eq!(repo.load().await.expect("load"), AppSettings::default());
        assert!(matches!(
            repo.save(&AppSettings::default()).await,
            Err(SettingsError::NoConfigDir)
        ));
    }
}

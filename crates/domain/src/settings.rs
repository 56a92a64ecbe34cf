//! User settings
//!
//! Preferences persisted in `settings.json` under the platform config
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Directory, relative to the home directory, holding the default store root.
const DEFAULT_ROOT_DIR: &str = ".hellorestsoft";

/// User settings for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Store root override. `None` means the default under the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections_root: Option<PathBuf>,

    /// Timeout applied to every sent request, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            collections_root: None,
            request_timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppSettings {
    /// Returns `~/.hellorestsoft/collections` for the given home directory.
    #[must_use]
    pub fn default_collections_root(home: &Path) -> PathBuf {
        home.join(DEFAULT_ROOT_DIR).join("collections")
    }

    /// Picks the store root: an explicit override wins, then the settings
    /// value, then the default under `home`.
    ///
    /// Returns `None` only when nothing is configured and no home directory
    /// is known.
    #[must_use]
    pub fn resolve_collections_root(
        &self,
        explicit: Option<PathBuf>,
        home: Option<&Path>,
    ) -> Option<PathBuf> {
        explicit
            .or_else(|| self.collections_root.clone())
            .or_else(|| home.map(Self::default_collections_root))
    }
}

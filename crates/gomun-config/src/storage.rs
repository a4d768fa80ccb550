//! Client-side storage configuration (where the session record lives).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding persisted client state. Empty means `~/.gomun`.
    #[serde(default)]
    pub dir: String,
}

impl StorageConfig {
    /// Resolve the storage directory. `None` only when no home directory
    /// exists and no explicit directory was configured.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(".gomun"))
        } else {
            Some(PathBuf::from(self.dir.trim()))
        }
    }
}

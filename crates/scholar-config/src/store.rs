//! Where the record collection is persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of the settings store, shared with earlier app versions.
pub const STORE_FILE_NAME: &str = "ScholarshipTrackerPrefs.json";

/// Key the serialized collection lives under inside the settings store.
pub const DEFAULT_SLOT: &str = "scholarships";

fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::APP_DIR)
        .join(STORE_FILE_NAME)
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Settings file holding the collection blob.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Slot key inside the settings file.
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            slot: default_slot(),
        }
    }
}

//! Defaults for how `list` presents the collection.

use serde::{Deserialize, Serialize};

use scholar_query::SortKey;

use crate::ConfigError;

fn default_sort() -> String {
    SortKey::default().as_str().to_string()
}

const fn default_grouped() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Sort key used when `list` is given no `--sort`.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Group `list` output into deadline sections unless `--flat` is passed.
    #[serde(default = "default_grouped")]
    pub grouped: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            grouped: default_grouped(),
        }
    }
}

impl DisplayConfig {
    /// Parse [`default_sort`](Self::default_sort).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the key names no sort order.
    pub fn sort_key(&self) -> Result<SortKey, ConfigError> {
        self.default_sort
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: "display.default_sort".to_string(),
                reason: format!(
                    "unknown sort key '{}', expected one of: {}",
                    self.default_sort,
                    SortKey::ALL.map(SortKey::as_str).join(", ")
                ),
            })
    }
}

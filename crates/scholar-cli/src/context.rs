use anyhow::Context;
use chrono::NaiveDate;

use scholar_config::ScholarConfig;
use scholar_core::deadline;
use scholar_store::{FileSettingsStore, ScholarshipRepository, SettingsStore};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext<S = FileSettingsStore> {
    pub config: ScholarConfig,
    pub repo: ScholarshipRepository<S>,
    /// Calendar date every deadline is judged against for this run.
    pub today: NaiveDate,
}

impl AppContext {
    /// Load configuration and open the configured settings file.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config =
            ScholarConfig::load_with_dotenv().context("failed to load scholar configuration")?;
        if let Some(path) = &flags.config_store {
            config.store.path.clone_from(path);
        }

        tracing::debug!(
            path = %config.store.path.display(),
            slot = %config.store.slot,
            "opening record store"
        );
        let repo = ScholarshipRepository::from_config(&config.store);

        Ok(Self {
            config,
            repo,
            today: deadline::today(),
        })
    }
}

#[cfg(test)]
impl<S: SettingsStore> AppContext<S> {
    /// Context over an arbitrary store and a fixed date.
    pub fn with_store(config: ScholarConfig, store: S, today: NaiveDate) -> Self {
        let repo = ScholarshipRepository::new(store, config.store.slot.clone());
        Self {
            config,
            repo,
            today,
        }
    }
}

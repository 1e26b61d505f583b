//! Shared fixtures for command handler tests.

use chrono::NaiveDate;
use scholar_config::ScholarConfig;
use scholar_core::entities::ScholarshipRecord;
use scholar_store::MemorySettingsStore;

use crate::context::AppContext;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// In-memory context dated [`today`].
pub fn test_context() -> AppContext<MemorySettingsStore> {
    AppContext::with_store(ScholarConfig::default(), MemorySettingsStore::new(), today())
}

/// Add `record` and return its assigned id.
pub fn seed(ctx: &mut AppContext<MemorySettingsStore>, record: ScholarshipRecord) -> String {
    ctx.repo.add(record).unwrap().id
}

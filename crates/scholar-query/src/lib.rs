//! # scholar-query
//!
//! Turns the full record collection plus a query into the ordered, optionally
//! sectioned sequence a view renders.
//!
//! Stages run in a fixed order and each one preserves the order of the one
//! before it:
//! 1. [`search`]: case-insensitive substring match over name, organization
//!    and requirements
//! 2. [`apply_filters`]: per-category accepted-value sets, ANDed together
//! 3. [`sort_records`]: one of five stable orders
//! 4. [`group_into_sections`]: Past / Now / Upcoming / No Deadline
//!
//! Nothing here fails or mutates; every call recomputes from the records it
//! is handed.

pub mod error;
pub mod filter;
pub mod search;
pub mod sections;
pub mod sort;

pub use error::QueryError;
pub use filter::{DocumentReadiness, FilterSet, apply_filters};
pub use search::search;
pub use sections::{Section, group_into_sections};
pub use sort::{SortKey, sort_records};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use scholar_core::entities::ScholarshipRecord;

/// Search text, filters and sort order for one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordQuery {
    pub search: String,
    pub filters: FilterSet,
    pub sort: SortKey,
}

impl RecordQuery {
    #[must_use]
    pub fn new(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Search, filter and sort `records`.
    #[must_use]
    pub fn run<'a>(&self, records: &'a [ScholarshipRecord]) -> Vec<&'a ScholarshipRecord> {
        let found = search(records, &self.search);
        let found_count = found.len();
        let kept = apply_filters(found, &self.filters);
        tracing::debug!(
            total = records.len(),
            searched = found_count,
            filtered = kept.len(),
            sort = %self.sort,
            "ran record query"
        );
        sort_records(kept, self.sort)
    }

    /// [`run`](Self::run), then group the result into sections for `today`.
    #[must_use]
    pub fn run_grouped<'a>(
        &self,
        records: &'a [ScholarshipRecord],
        today: NaiveDate,
    ) -> Vec<Section<'a>> {
        group_into_sections(self.run(records), today)
    }
}

//! Multi-category filters.
//!
//! Each category holds a set of accepted values. An empty set places no
//! constraint on that category; categories combine with AND, values within a
//! category with OR.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::{ApplicationStatus, DegreeType, LanguageRequirement, ReachType, Vocabulary};

/// Coarse document-preparation state used by the documents filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentReadiness {
    /// Every document prepared.
    #[serde(rename = "All Ready")]
    AllReady,
    /// Some prepared, some not.
    #[serde(rename = "Some Missing")]
    SomeMissing,
    /// Nothing prepared yet.
    #[serde(rename = "None Ready")]
    NoneReady,
}

impl DocumentReadiness {
    pub const ALL: [Self; 3] = [Self::AllReady, Self::SomeMissing, Self::NoneReady];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllReady => "All Ready",
            Self::SomeMissing => "Some Missing",
            Self::NoneReady => "None Ready",
        }
    }

    #[must_use]
    pub fn matches(self, record: &ScholarshipRecord) -> bool {
        let all_ready = record.document_completion_percentage() == 100;
        let any_prepared = record.documents_required.prepared_count() > 0;
        match self {
            Self::AllReady => all_ready,
            Self::SomeMissing => !all_ready && any_prepared,
            Self::NoneReady => !any_prepared,
        }
    }
}

impl Vocabulary for DocumentReadiness {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for DocumentReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted values per filter category.
///
/// `documents` is ordered and only its first entry is consulted; selecting
/// several readiness states has no combined effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub status: BTreeSet<ApplicationStatus>,
    pub degree: BTreeSet<DegreeType>,
    pub language: BTreeSet<LanguageRequirement>,
    pub reach: BTreeSet<ReachType>,
    pub documents: Vec<DocumentReadiness>,
}

impl FilterSet {
    /// No category constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.degree.is_empty()
            && self.language.is_empty()
            && self.reach.is_empty()
            && self.documents.is_empty()
    }

    /// Whether `record` passes every constrained category.
    #[must_use]
    pub fn accepts(&self, record: &ScholarshipRecord) -> bool {
        (self.status.is_empty() || self.status.contains(&record.status))
            && (self.degree.is_empty()
                || record.degree_types.iter().any(|d| self.degree.contains(d)))
            && (self.language.is_empty() || self.language.contains(&record.language_requirement))
            && (self.reach.is_empty() || self.reach.contains(&record.application_reach_type))
            && self.documents.first().is_none_or(|r| r.matches(record))
    }
}

/// Keep the records `filters` accepts, preserving order.
pub fn apply_filters<'a, I>(records: I, filters: &FilterSet) -> Vec<&'a ScholarshipRecord>
where
    I: IntoIterator<Item = &'a ScholarshipRecord>,
{
    records
        .into_iter()
        .filter(|record| filters.accepts(record))
        .collect()
}

//! Sort orders for the record list. Every order is stable.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use scholar_core::entities::ScholarshipRecord;

use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Earliest exact deadline first; records without one last.
    #[default]
    DeadlineAsc,
    /// Latest exact deadline first; records without one first.
    DeadlineDesc,
    NameAsc,
    NameDesc,
    /// Not Applied, Applied, Accepted, Rejected.
    Status,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::DeadlineAsc,
        Self::DeadlineDesc,
        Self::NameAsc,
        Self::NameDesc,
        Self::Status,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeadlineAsc => "deadline_asc",
            Self::DeadlineDesc => "deadline_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Accepts `deadline_asc` or `deadline-asc`, any ASCII case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| QueryError::UnknownSortKey(raw.to_string()))
    }
}

/// Order records by `key`. Ties keep their input order.
#[must_use]
pub fn sort_records(
    mut records: Vec<&ScholarshipRecord>,
    key: SortKey,
) -> Vec<&ScholarshipRecord> {
    match key {
        SortKey::DeadlineAsc => records.sort_by(|a, b| deadline_asc(a, b)),
        SortKey::DeadlineDesc => records.sort_by(|a, b| deadline_desc(a, b)),
        SortKey::NameAsc => records.sort_by_cached_key(|r| r.name.to_lowercase()),
        SortKey::NameDesc => records.sort_by(|a, b| {
            b.name.to_lowercase().cmp(&a.name.to_lowercase())
        }),
        SortKey::Status => records.sort_by_key(|r| r.status.rank()),
    }
    records
}

fn deadline_asc(a: &ScholarshipRecord, b: &ScholarshipRecord) -> Ordering {
    match (a.parsed_deadline(), b.parsed_deadline()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn deadline_desc(a: &ScholarshipRecord, b: &ScholarshipRecord) -> Ordering {
    match (a.parsed_deadline(), b.parsed_deadline()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use scholar_core::enums::{ApplicationStatus, DeadlineType};

    use super::*;

    fn record(name: &str, deadline: &str) -> ScholarshipRecord {
        ScholarshipRecord {
            deadline: deadline.to_string(),
            ..ScholarshipRecord::new(name, "Org")
        }
    }

    fn names(records: &[&ScholarshipRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn fixtures() -> Vec<ScholarshipRecord> {
        let mut rolling = record("rolling", "");
        rolling.deadline_type = DeadlineType::Rolling;
        vec![
            record("march", "15/03/2027"),
            record("blank", ""),
            record("january", "10/01/2027"),
            rolling,
            record("garbled", "soon"),
            record("june", "01/06/2027"),
        ]
    }

    #[test]
    fn deadline_asc_puts_undated_last_in_input_order() {
        let records = fixtures();
        let sorted = sort_records(records.iter().collect(), SortKey::DeadlineAsc);
        assert_eq!(
            names(&sorted),
            vec!["january", "march", "june", "blank", "rolling", "garbled"]
        );
    }

    #[test]
    fn deadline_desc_puts_undated_first_in_input_order() {
        let records = fixtures();
        let sorted = sort_records(records.iter().collect(), SortKey::DeadlineDesc);
        assert_eq!(
            names(&sorted),
            vec!["blank", "rolling", "garbled", "june", "march", "january"]
        );
    }

    #[test]
    fn name_sort_is_case_folded() {
        let records = vec![record("beta", ""), record("Alpha", ""), record("gamma", "")];
        let asc = sort_records(records.iter().collect(), SortKey::NameAsc);
        assert_eq!(names(&asc), vec!["Alpha", "beta", "gamma"]);
        let desc = sort_records(records.iter().collect(), SortKey::NameDesc);
        assert_eq!(names(&desc), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn status_sort_is_stable_within_rank() {
        let statuses = [
            ("r1", ApplicationStatus::Rejected),
            ("n1", ApplicationStatus::NotApplied),
            ("a1", ApplicationStatus::Accepted),
            ("n2", ApplicationStatus::NotApplied),
            ("p1", ApplicationStatus::Applied),
        ];
        let records: Vec<ScholarshipRecord> = statuses
            .iter()
            .map(|(name, status)| ScholarshipRecord {
                status: *status,
                ..record(name, "")
            })
            .collect();

        let sorted = sort_records(records.iter().collect(), SortKey::Status);
        assert_eq!(names(&sorted), vec!["n1", "n2", "p1", "a1", "r1"]);
    }

    #[rstest]
    #[case(SortKey::DeadlineAsc, vec!["first", "second", "later"])]
    #[case(SortKey::DeadlineDesc, vec!["later", "first", "second"])]
    fn equal_deadlines_keep_input_order(#[case] key: SortKey, #[case] expected: Vec<&str>) {
        let records = vec![
            record("first", "10/01/2027"),
            record("later", "20/02/2027"),
            record("second", "10/01/2027"),
        ];
        let sorted = sort_records(records.iter().collect(), key);
        assert_eq!(names(&sorted), expected);
    }

    #[rstest]
    #[case(SortKey::NameAsc, vec!["alpha", "Alpha", "ALPHA", "beta"])]
    #[case(SortKey::NameDesc, vec!["beta", "alpha", "Alpha", "ALPHA"])]
    fn case_folded_name_ties_keep_input_order(
        #[case] key: SortKey,
        #[case] expected: Vec<&str>,
    ) {
        let records = vec![
            record("alpha", ""),
            record("beta", ""),
            record("Alpha", ""),
            record("ALPHA", ""),
        ];
        let sorted = sort_records(records.iter().collect(), key);
        assert_eq!(names(&sorted), expected);
    }

    #[rstest]
    #[case(SortKey::DeadlineAsc)]
    #[case(SortKey::DeadlineDesc)]
    #[case(SortKey::NameAsc)]
    #[case(SortKey::NameDesc)]
    #[case(SortKey::Status)]
    fn sorting_is_idempotent(#[case] key: SortKey) {
        let records = fixtures();
        let once = sort_records(records.iter().collect(), key);
        let twice = sort_records(once.clone(), key);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!("deadline-desc".parse::<SortKey>().unwrap(), SortKey::DeadlineDesc);
        assert_eq!("NAME_ASC".parse::<SortKey>().unwrap(), SortKey::NameAsc);
        assert!("priority".parse::<SortKey>().is_err());
    }
}

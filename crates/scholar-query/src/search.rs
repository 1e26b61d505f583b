//! Free-text search over name, organization, and requirements.

use scholar_core::entities::ScholarshipRecord;

/// Whether `record` contains `needle` (already lower-cased) in its name,
/// organization, or requirements.
#[must_use]
pub fn matches_query(record: &ScholarshipRecord, needle: &str) -> bool {
    [&record.name, &record.organization, &record.requirements]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive substring search. An empty query keeps every record.
pub fn search<'a, I>(records: I, query: &str) -> Vec<&'a ScholarshipRecord>
where
    I: IntoIterator<Item = &'a ScholarshipRecord>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_query(record, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names<'a>(records: &[&'a ScholarshipRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn fixtures() -> Vec<ScholarshipRecord> {
        let mut mit = ScholarshipRecord::new("Presidential Fellowship", "mit Graduate School");
        mit.requirements = "Research statement".into();
        let mut daad = ScholarshipRecord::new("EPOS", "DAAD");
        daad.requirements = "Two years of work experience at an MIT partner".into();
        let chevening = ScholarshipRecord::new("Chevening", "FCDO");
        vec![mit, daad, chevening]
    }

    #[test]
    fn matches_organization_case_insensitively() {
        let records = fixtures();
        let hits = search(&records, "MIT");
        assert_eq!(names(&hits), vec!["Presidential Fellowship", "EPOS"]);
    }

    #[test]
    fn matches_name() {
        let records = fixtures();
        assert_eq!(names(&search(&records, "cheven")), vec!["Chevening"]);
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let records = fixtures();
        assert_eq!(search(&records, "").len(), 3);
    }

    #[test]
    fn no_match_yields_empty() {
        let records = fixtures();
        assert!(search(&records, "fulbright").is_empty());
    }
}

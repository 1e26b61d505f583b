//! End-to-end query runs over a small realistic collection.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use scholar_core::deadline::DEADLINE_FORMAT;
use scholar_core::documents::DocumentType;
use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::{ApplicationStatus, DeadlineType, DegreeType, SectionCategory};
use scholar_query::{DocumentReadiness, FilterSet, RecordQuery, SortKey};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn due_in(days: i64) -> String {
    (today() + Duration::days(days))
        .format(DEADLINE_FORMAT)
        .to_string()
}

fn collection() -> Vec<ScholarshipRecord> {
    let mut mext = ScholarshipRecord::new("MEXT Research", "Japanese Government");
    mext.deadline = due_in(12);
    mext.degree_types = vec![DegreeType::Masters, DegreeType::Phd];
    mext.requirements = "Research plan, transcripts, medical certificate".into();

    let mut kaist = ScholarshipRecord::new("KAIST International", "KAIST");
    kaist.deadline = due_in(-20);
    kaist.status = ApplicationStatus::Rejected;

    let mut mit = ScholarshipRecord::new("Presidential Fellowship", "MIT");
    mit.deadline = due_in(75);
    mit.degree_types = vec![DegreeType::Phd];
    mit.status = ApplicationStatus::Applied;
    for doc in DocumentType::ALL {
        mit.documents_required.set(doc, true);
    }

    let mut gates = ScholarshipRecord::new("Gates Cambridge", "University of Cambridge");
    gates.deadline_type = DeadlineType::Month;
    gates.deadline_month = "December 2026".into();
    gates.degree_types = vec![DegreeType::Phd];
    gates.documents_required.set(DocumentType::Cv, true);

    let mut swiss = ScholarshipRecord::new("Swiss Excellence", "ESKAS");
    swiss.deadline_type = DeadlineType::Tba;
    swiss.degree_types = vec![DegreeType::Postdoc];

    let mut daad = ScholarshipRecord::new("DAAD EPOS", "DAAD");
    daad.deadline = due_in(5);
    daad.status = ApplicationStatus::Accepted;

    vec![mext, kaist, mit, gates, swiss, daad]
}

fn names<'a>(records: &[&'a ScholarshipRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn default_query_groups_by_deadline() {
    let records = collection();
    let sections = RecordQuery::default().run_grouped(&records, today());

    let layout: Vec<(SectionCategory, Vec<&str>)> = sections
        .iter()
        .map(|s| (s.category, names(&s.records)))
        .collect();

    assert_eq!(
        layout,
        vec![
            (SectionCategory::Past, vec!["KAIST International"]),
            (SectionCategory::Now, vec!["DAAD EPOS", "MEXT Research"]),
            (
                SectionCategory::Upcoming,
                vec!["Presidential Fellowship", "Gates Cambridge"]
            ),
            (SectionCategory::NoDeadline, vec!["Swiss Excellence"]),
        ]
    );
}

#[test]
fn search_then_filter_then_sort() {
    let records = collection();
    let query = RecordQuery {
        search: "cam".into(),
        filters: FilterSet {
            degree: BTreeSet::from([DegreeType::Phd]),
            ..FilterSet::default()
        },
        sort: SortKey::NameAsc,
    };

    assert_eq!(names(&query.run(&records)), vec!["Gates Cambridge"]);
}

#[test]
fn phd_filter_sorted_by_status() {
    let records = collection();
    let query = RecordQuery {
        filters: FilterSet {
            degree: BTreeSet::from([DegreeType::Phd]),
            ..FilterSet::default()
        },
        sort: SortKey::Status,
        ..RecordQuery::default()
    };

    assert_eq!(
        names(&query.run(&records)),
        vec!["MEXT Research", "Gates Cambridge", "Presidential Fellowship"]
    );
}

#[test]
fn documents_filter_all_ready() {
    let records = collection();
    let query = RecordQuery {
        filters: FilterSet {
            documents: vec![DocumentReadiness::AllReady],
            ..FilterSet::default()
        },
        ..RecordQuery::default()
    };
    assert_eq!(names(&query.run(&records)), vec!["Presidential Fellowship"]);

    let query = RecordQuery {
        filters: FilterSet {
            documents: vec![DocumentReadiness::SomeMissing],
            ..FilterSet::default()
        },
        ..RecordQuery::default()
    };
    assert_eq!(names(&query.run(&records)), vec!["Gates Cambridge"]);
}

#[test]
fn search_matches_requirements_text() {
    let records = collection();
    let query = RecordQuery {
        search: "MEDICAL".into(),
        ..RecordQuery::default()
    };
    assert_eq!(names(&query.run(&records)), vec!["MEXT Research"]);
}

#[test]
fn empty_collection_yields_empty_output() {
    let records: Vec<ScholarshipRecord> = Vec::new();
    let query = RecordQuery {
        search: "anything".into(),
        ..RecordQuery::default()
    };
    assert!(query.run(&records).is_empty());
    assert!(query.run_grouped(&records, today()).is_empty());
}

#[test]
fn query_roundtrips_through_json() {
    let query = RecordQuery {
        search: "mit".into(),
        filters: FilterSet {
            status: BTreeSet::from([ApplicationStatus::NotApplied]),
            documents: vec![DocumentReadiness::NoneReady],
            ..FilterSet::default()
        },
        sort: SortKey::DeadlineDesc,
    };
    let json = serde_json::to_string(&query).unwrap();
    assert!(json.contains("\"deadline_desc\""));
    assert!(json.contains("\"Not Applied\""));
    let recovered: RecordQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, query);
}

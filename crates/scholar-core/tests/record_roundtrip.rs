//! Serde roundtrip and JsonSchema validation for the stored record shape.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use scholar_core::documents::DocumentType;
use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::{
    ApplicationStatus, DeadlineType, DegreeType, LanguageRequirement, ReachType,
};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn full_record() -> ScholarshipRecord {
    let mut record = ScholarshipRecord {
        id: "sch-a3f8b2c1".into(),
        name: "Eiffel Excellence".into(),
        organization: "Campus France".into(),
        deadline_type: DeadlineType::Exact,
        deadline: "10/01/2027".into(),
        deadline_notes: "Nominated by the university".into(),
        tuition_covered: true,
        monthly_stipend: "€1,181/month".into(),
        airfare_covered: true,
        health_insurance_covered: true,
        other_benefits: "Cultural activities".into(),
        requirements: "CV, motivation letter, two references, IELTS 6.5".into(),
        application_link: "https://www.campusfrance.org/".into(),
        notes: "Ask supervisor early".into(),
        status: ApplicationStatus::Applied,
        degree_types: vec![DegreeType::Masters, DegreeType::Phd],
        language_requirement: LanguageRequirement::Ielts,
        application_reach_type: ReachType::Both,
        ..ScholarshipRecord::default()
    };
    record.documents_required.set(DocumentType::Cv, true);
    record.documents_required.set(DocumentType::Transcripts, true);
    record
}

#[test]
fn record_roundtrip_and_schema() {
    let record = full_record();

    let json_str = serde_json::to_string_pretty(&record).unwrap();
    let recovered: ScholarshipRecord = serde_json::from_str(&json_str).unwrap();
    assert_eq!(recovered, record);

    let schema = serde_json::to_value(schema_for!(ScholarshipRecord)).unwrap();
    let instance = serde_json::to_value(&record).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "Schema validation failed: {errors:?}");
}

#[test]
fn collection_roundtrip_preserves_order_and_fields() {
    let mut second = ScholarshipRecord::new("Chevening", "FCDO");
    second.id = "sch-00000002".into();
    second.deadline_type = DeadlineType::Tba;
    let records = vec![full_record(), second];

    let blob = serde_json::to_string(&records).unwrap();
    let recovered: Vec<ScholarshipRecord> = serde_json::from_str(&blob).unwrap();
    assert_eq!(recovered, records);
}

#[test]
fn stored_blob_uses_canonical_labels() {
    let value = serde_json::to_value(full_record()).unwrap();

    assert_eq!(value["deadlineType"], "Exact");
    assert_eq!(value["status"], "Applied");
    assert_eq!(value["degreeTypes"], serde_json::json!(["Masters", "PhD"]));
    assert_eq!(value["applicationReachType"], "Both");

    let docs = value["documentsRequired"].as_object().unwrap();
    let keys: Vec<&str> = docs.keys().map(String::as_str).collect();
    let mut expected: Vec<&str> = DocumentType::ALL.iter().map(|d| d.as_str()).collect();
    expected.sort_unstable();
    let mut actual = keys;
    actual.sort_unstable();
    assert_eq!(actual, expected);
    assert_eq!(docs["CV"], true);
}

#[test]
fn decodes_blob_written_by_earlier_version() {
    let blob = r#"[{
        "id": "1735689600000",
        "name": "DAAD EPOS",
        "organization": "DAAD",
        "deadlineType": "",
        "deadline": "",
        "deadlineMonth": "",
        "deadlineRange": "",
        "deadlineNotes": "",
        "tuitionCovered": true,
        "monthlyStipend": "€934",
        "airfareCovered": false,
        "accommodationCovered": false,
        "healthInsuranceCovered": true,
        "otherBenefits": "",
        "livingCosts": "",
        "requirements": "Two years work experience",
        "applicationLink": "https://www.daad.de",
        "notes": "",
        "status": "Not Applied",
        "degreeTypes": ["Masters"],
        "degreeType": "Masters",
        "languageRequirement": "TOEFL",
        "applicationReachType": "Institution",
        "documentsRequired": {
            "SOP": true, "LOR": false, "Motivation Letter": false,
            "Research Proposal": false, "CV": true, "Transcripts": false,
            "Degree Certificate": false, "Language Test": false,
            "Passport Copy": false, "Study Plan": false,
            "Reference Letters": false, "Work Experience Proof": false,
            "Portfolio": false, "Medical Certificate": false
        }
    }]"#;

    let records: Vec<ScholarshipRecord> = serde_json::from_str(blob).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.deadline_type, DeadlineType::Unset);
    assert_eq!(record.language_requirement, LanguageRequirement::Toefl);
    assert_eq!(
        record.prepared_documents(),
        vec![DocumentType::Sop, DocumentType::Cv]
    );
    assert_eq!(record.financial_summary(), "Tuition, Stipend, Insurance");
    assert_eq!(record.display_deadline(), "No deadline set");
}

//! Serializable views of records with their derived state.
//!
//! JSON output is the stored record plus the computed fields a screen would
//! show, so consumers never recompute classification themselves.

use chrono::NaiveDate;
use serde::Serialize;

use scholar_core::deadline::DeadlineUrgency;
use scholar_core::documents::{DocumentChecklist, DocumentType, ProgressTier};
use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::SectionCategory;
use scholar_query::Section;

/// How many prepared documents a detail view lists before "+N more".
pub const PREPARED_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView<'a> {
    #[serde(flatten)]
    pub record: &'a ScholarshipRecord,
    pub display_deadline: String,
    pub section_category: SectionCategory,
    pub days_until_deadline: Option<i64>,
    pub urgency: Option<DeadlineUrgency>,
    pub warning: Option<String>,
    pub financial_summary: String,
    pub documents_summary: String,
    pub document_progress: ProgressTier,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a ScholarshipRecord, today: NaiveDate) -> Self {
        let urgency = record.deadline_urgency_on(today);
        Self {
            record,
            display_deadline: record.display_deadline(),
            section_category: record.section_category_on(today),
            days_until_deadline: record.days_until_deadline_on(today),
            urgency,
            warning: urgency.and_then(DeadlineUrgency::warning_label),
            financial_summary: record.financial_summary(),
            documents_summary: record.documents_summary(),
            document_progress: record.document_progress_tier(),
        }
    }
}

/// Everything `show` prints for one record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    #[serde(flatten)]
    pub view: RecordView<'a>,
    pub deadline_note: Option<String>,
    pub degree_types_label: String,
    pub prepared_documents: Vec<DocumentType>,
    pub missing_documents: Vec<DocumentType>,
    pub prepared_preview: Vec<String>,
}

impl<'a> DetailView<'a> {
    pub fn new(record: &'a ScholarshipRecord, today: NaiveDate) -> Self {
        let view = RecordView::new(record, today);
        Self {
            deadline_note: view.urgency.and_then(DeadlineUrgency::detail_note),
            degree_types_label: record.degree_types_label(),
            prepared_documents: record.prepared_documents(),
            missing_documents: record.missing_documents(),
            prepared_preview: record.prepared_preview(PREPARED_PREVIEW_LIMIT),
            view,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView<'a> {
    pub category: SectionCategory,
    pub title: &'static str,
    pub count: usize,
    pub records: Vec<RecordView<'a>>,
}

impl<'a> SectionView<'a> {
    pub fn new(section: Section<'a>, today: NaiveDate) -> Self {
        Self {
            category: section.category,
            title: section.title,
            count: section.count,
            records: section
                .records
                .into_iter()
                .map(|record| RecordView::new(record, today))
                .collect(),
        }
    }
}

/// Result of `detect`: the reset checklist and what the text called for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionView {
    pub id: String,
    pub matched: Vec<DocumentType>,
    pub documents_required: DocumentChecklist,
}

/// Result of `docs`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistView {
    pub id: String,
    pub documents_summary: String,
    pub prepared: Vec<DocumentType>,
    pub missing: Vec<DocumentType>,
}

/// Result of `delete` and `clear`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalView {
    pub id: Option<String>,
    pub removed: usize,
}

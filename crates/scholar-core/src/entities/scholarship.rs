use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::documents::{DocumentChecklist, DocumentType, ProgressTier};
use crate::enums::{ApplicationStatus, DeadlineType, DegreeType, LanguageRequirement, ReachType};
use crate::errors::CoreError;

/// A tracked scholarship opportunity.
///
/// Which deadline field is meaningful depends on `deadline_type`: `deadline`
/// (`DD/MM/YYYY`) for `Exact`, `deadline_month` for `Month`, `deadline_range`
/// for `Range`. `deadline_notes` is free-form supplementary text.
///
/// Records are replaced whole on save; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ScholarshipRecord {
    /// Assigned once when the record is first added.
    pub id: String,
    pub name: String,
    pub organization: String,

    pub deadline_type: DeadlineType,
    pub deadline: String,
    pub deadline_month: String,
    pub deadline_range: String,
    pub deadline_notes: String,

    pub tuition_covered: bool,
    pub monthly_stipend: String,
    pub airfare_covered: bool,
    pub accommodation_covered: bool,
    pub health_insurance_covered: bool,
    pub other_benefits: String,
    pub living_costs: String,

    pub requirements: String,
    pub application_link: String,
    pub notes: String,
    pub status: ApplicationStatus,

    /// Stored order is display order.
    pub degree_types: Vec<DegreeType>,
    /// Single-degree field kept for older stored collections. Mirrors the
    /// first entry of `degree_types` after [`normalize`](Self::normalize).
    pub degree_type: DegreeType,

    pub language_requirement: LanguageRequirement,
    pub application_reach_type: ReachType,

    /// Prepared state per canonical document (`true` = prepared).
    #[schemars(with = "std::collections::BTreeMap<String, bool>")]
    pub documents_required: DocumentChecklist,
}

impl Default for ScholarshipRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            organization: String::new(),
            deadline_type: DeadlineType::Exact,
            deadline: String::new(),
            deadline_month: String::new(),
            deadline_range: String::new(),
            deadline_notes: String::new(),
            tuition_covered: false,
            monthly_stipend: String::new(),
            airfare_covered: false,
            accommodation_covered: false,
            health_insurance_covered: false,
            other_benefits: String::new(),
            living_costs: String::new(),
            requirements: String::new(),
            application_link: String::new(),
            notes: String::new(),
            status: ApplicationStatus::NotApplied,
            degree_types: vec![DegreeType::Masters],
            degree_type: DegreeType::Masters,
            language_requirement: LanguageRequirement::Ielts,
            application_reach_type: ReachType::Institution,
            documents_required: DocumentChecklist::new(),
        }
    }
}

impl ScholarshipRecord {
    /// A record with default terms and no id. The id is assigned on add.
    #[must_use]
    pub fn new(name: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization: organization.into(),
            ..Self::default()
        }
    }

    /// Check the fields a save requires.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` when `name` or `organization` is
    /// empty or whitespace.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField { field: "name" });
        }
        if self.organization.trim().is_empty() {
            return Err(CoreError::MissingField {
                field: "organization",
            });
        }
        Ok(())
    }

    /// Bring the record into its saved shape: degree types de-duplicated
    /// (first occurrence wins) and never empty, legacy field in sync.
    pub fn normalize(&mut self) {
        let mut seen = Vec::with_capacity(self.degree_types.len());
        for degree in self.degree_types.drain(..) {
            if !seen.contains(&degree) {
                seen.push(degree);
            }
        }
        if seen.is_empty() {
            seen.push(DegreeType::Masters);
        }
        self.degree_type = seen[0];
        self.degree_types = seen;
    }

    /// Covered benefits in fixed order, or `"Check details"` when none are.
    #[must_use]
    pub fn financial_summary(&self) -> String {
        let benefits: Vec<&str> = [
            (self.tuition_covered, "Tuition"),
            (!self.monthly_stipend.is_empty(), "Stipend"),
            (self.airfare_covered, "Airfare"),
            (self.accommodation_covered, "Accommodation"),
            (self.health_insurance_covered, "Insurance"),
        ]
        .into_iter()
        .filter_map(|(covered, label)| covered.then_some(label))
        .collect();

        if benefits.is_empty() {
            "Check details".to_string()
        } else {
            benefits.join(", ")
        }
    }

    #[must_use]
    pub fn degree_types_label(&self) -> String {
        self.degree_types
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    // --- Documents ---

    #[must_use]
    pub fn missing_documents(&self) -> Vec<DocumentType> {
        self.documents_required.missing()
    }

    #[must_use]
    pub fn prepared_documents(&self) -> Vec<DocumentType> {
        self.documents_required.prepared()
    }

    /// `floor(prepared * 100 / 14)`.
    #[must_use]
    pub fn document_completion_percentage(&self) -> u8 {
        self.documents_required.completion_percentage()
    }

    #[must_use]
    pub fn all_documents_prepared(&self) -> bool {
        self.documents_required.all_prepared()
    }

    #[must_use]
    pub fn document_progress_tier(&self) -> ProgressTier {
        ProgressTier::from_percentage(self.document_completion_percentage())
    }

    /// e.g. `"3/14 Documents (21%)"`.
    #[must_use]
    pub fn documents_summary(&self) -> String {
        format!(
            "{}/{} Documents ({}%)",
            self.documents_required.prepared_count(),
            self.documents_required.len(),
            self.document_completion_percentage()
        )
    }

    /// The first `limit` prepared document labels, followed by `"+N more"`
    /// when more are prepared.
    #[must_use]
    pub fn prepared_preview(&self, limit: usize) -> Vec<String> {
        let prepared = self.prepared_documents();
        let mut preview: Vec<String> = prepared
            .iter()
            .take(limit)
            .map(|d| d.as_str().to_string())
            .collect();
        if prepared.len() > limit {
            preview.push(format!("+{} more", prepared.len() - limit));
        }
        preview
    }
}

//! Keyword-based detection of required documents from requirement text.
//!
//! Each document type has a fixed list of lower-case triggers matched as
//! plain substrings of the lower-cased text, so `"cv"` also fires inside
//! longer words and `"reference letter"` flags both LOR and Reference
//! Letters.
//!
//! Applying detection to a record resets its whole checklist to unprepared;
//! the set of matched documents is returned separately so the caller can
//! tell "flagged as needed" apart from "merely reset".

use std::collections::BTreeSet;

use crate::documents::{DocumentChecklist, DocumentType};
use crate::entities::ScholarshipRecord;

impl DocumentType {
    /// Lower-case substrings that mark this document as needed.
    #[must_use]
    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Sop => &["sop", "statement of purpose", "personal statement"],
            Self::Lor => &[
                "lor",
                "letter of recommendation",
                "reference letter",
                "recommendation letter",
                "2 lor",
                "3 lor",
                "two references",
            ],
            Self::MotivationLetter => &["motivation", "cover letter", "motivation letter"],
            Self::ResearchProposal => &["research proposal", "research plan", "research statement"],
            Self::Cv => &["cv", "resume", "curriculum vitae"],
            Self::Transcripts => &["transcript", "academic record", "grade sheet", "mark sheet"],
            Self::DegreeCertificate => &[
                "degree certificate",
                "bachelor",
                "graduation certificate",
                "diploma",
            ],
            Self::LanguageTest => &[
                "ielts",
                "toefl",
                "language test",
                "english proficiency",
                "pte",
                "duolingo",
            ],
            Self::PassportCopy => &["passport", "id proof", "identification"],
            Self::StudyPlan => &["study plan", "academic plan", "course plan"],
            Self::ReferenceLetters => &["reference", "referee", "academic reference"],
            Self::WorkExperienceProof => &[
                "work experience",
                "employment",
                "professional experience",
                "work history",
            ],
            Self::Portfolio => &["portfolio", "work samples", "creative work"],
            Self::MedicalCertificate => &[
                "medical",
                "health certificate",
                "health insurance",
                "medical examination",
            ],
        }
    }
}

/// Documents whose triggers appear in `requirements`, in canonical order.
#[must_use]
pub fn detect_documents(requirements: &str) -> BTreeSet<DocumentType> {
    let text = requirements.to_lowercase();
    DocumentType::ALL
        .into_iter()
        .filter(|doc| doc.triggers().iter().any(|t| text.contains(t)))
        .collect()
}

/// Result of running detection against a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDetection {
    /// The record's checklist after detection: every slot unprepared.
    pub checklist: DocumentChecklist,
    /// Documents the requirement text calls for.
    pub matched: BTreeSet<DocumentType>,
}

impl DocumentDetection {
    /// Whether `doc` was flagged by the text (needs preparing).
    #[must_use]
    pub fn is_flagged(&self, doc: DocumentType) -> bool {
        self.matched.contains(&doc)
    }
}

impl ScholarshipRecord {
    /// Reset the document checklist and detect which documents
    /// `requirements` calls for.
    ///
    /// Every slot ends up `false` (unprepared), matched or not; the matched
    /// set in the returned [`DocumentDetection`] is the only record of which
    /// documents the text named.
    pub fn auto_detect_documents(&mut self, requirements: &str) -> DocumentDetection {
        self.documents_required.reset();
        DocumentDetection {
            checklist: self.documents_required,
            matched: detect_documents(requirements),
        }
    }
}

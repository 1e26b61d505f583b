//! The fixed application-document checklist.
//!
//! A record tracks exactly 14 document types. Each slot holds a "prepared"
//! flag: `true` means the applicant has the document ready. The checklist is
//! a fixed array indexed by [`DocumentType`], so a slot can never be added or
//! dropped.
//!
//! On the wire the checklist is a JSON object keyed by the canonical labels
//! (`"SOP"`, `"Motivation Letter"`, ...) in canonical order. Missing keys
//! decode as unprepared; unknown keys are ignored.

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enums::Vocabulary;

/// One of the 14 canonical application documents. Declaration order is the
/// canonical key order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum DocumentType {
    #[serde(rename = "SOP")]
    Sop,
    #[serde(rename = "LOR")]
    Lor,
    #[serde(rename = "Motivation Letter")]
    MotivationLetter,
    #[serde(rename = "Research Proposal")]
    ResearchProposal,
    #[serde(rename = "CV")]
    Cv,
    Transcripts,
    #[serde(rename = "Degree Certificate")]
    DegreeCertificate,
    #[serde(rename = "Language Test")]
    LanguageTest,
    #[serde(rename = "Passport Copy")]
    PassportCopy,
    #[serde(rename = "Study Plan")]
    StudyPlan,
    #[serde(rename = "Reference Letters")]
    ReferenceLetters,
    #[serde(rename = "Work Experience Proof")]
    WorkExperienceProof,
    Portfolio,
    #[serde(rename = "Medical Certificate")]
    MedicalCertificate,
}

impl DocumentType {
    pub const COUNT: usize = 14;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Sop,
        Self::Lor,
        Self::MotivationLetter,
        Self::ResearchProposal,
        Self::Cv,
        Self::Transcripts,
        Self::DegreeCertificate,
        Self::LanguageTest,
        Self::PassportCopy,
        Self::StudyPlan,
        Self::ReferenceLetters,
        Self::WorkExperienceProof,
        Self::Portfolio,
        Self::MedicalCertificate,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sop => "SOP",
            Self::Lor => "LOR",
            Self::MotivationLetter => "Motivation Letter",
            Self::ResearchProposal => "Research Proposal",
            Self::Cv => "CV",
            Self::Transcripts => "Transcripts",
            Self::DegreeCertificate => "Degree Certificate",
            Self::LanguageTest => "Language Test",
            Self::PassportCopy => "Passport Copy",
            Self::StudyPlan => "Study Plan",
            Self::ReferenceLetters => "Reference Letters",
            Self::WorkExperienceProof => "Work Experience Proof",
            Self::Portfolio => "Portfolio",
            Self::MedicalCertificate => "Medical Certificate",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Vocabulary for DocumentType {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion percentage, floored. An empty checklist counts as complete.
#[must_use]
pub const fn completion_percentage(prepared: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    #[allow(clippy::cast_possible_truncation)]
    let pct = (prepared.saturating_mul(100) / total) as u8;
    pct
}

/// Colour band of the document progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    /// Every document prepared.
    Complete,
    /// At least half prepared.
    Partial,
    Low,
}

impl ProgressTier {
    #[must_use]
    pub const fn from_percentage(pct: u8) -> Self {
        match pct {
            100.. => Self::Complete,
            50..=99 => Self::Partial,
            _ => Self::Low,
        }
    }
}

/// Prepared state for each of the 14 canonical documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocumentChecklist {
    prepared: [bool; DocumentType::COUNT],
}

impl DocumentChecklist {
    /// A checklist with every document unprepared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prepared: [false; DocumentType::COUNT],
        }
    }

    #[must_use]
    pub const fn is_prepared(&self, doc: DocumentType) -> bool {
        self.prepared[doc.index()]
    }

    pub const fn set(&mut self, doc: DocumentType, prepared: bool) {
        self.prepared[doc.index()] = prepared;
    }

    /// Mark every document unprepared.
    pub const fn reset(&mut self) {
        self.prepared = [false; DocumentType::COUNT];
    }

    /// Slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentType, bool)> + '_ {
        DocumentType::ALL
            .into_iter()
            .map(move |doc| (doc, self.is_prepared(doc)))
    }

    /// Always 14.
    #[must_use]
    pub const fn len(&self) -> usize {
        DocumentType::COUNT
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        DocumentType::COUNT == 0
    }

    #[must_use]
    pub fn prepared(&self) -> Vec<DocumentType> {
        self.iter().filter(|(_, p)| *p).map(|(d, _)| d).collect()
    }

    #[must_use]
    pub fn missing(&self) -> Vec<DocumentType> {
        self.iter().filter(|(_, p)| !*p).map(|(d, _)| d).collect()
    }

    #[must_use]
    pub fn prepared_count(&self) -> usize {
        self.prepared.iter().filter(|p| **p).count()
    }

    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(self.prepared_count(), self.len())
    }

    #[must_use]
    pub fn all_prepared(&self) -> bool {
        self.prepared.iter().all(|p| *p)
    }
}

impl Serialize for DocumentChecklist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (doc, prepared) in self.iter() {
            map.serialize_entry(doc.as_str(), &prepared)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DocumentChecklist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, bool>::deserialize(deserializer)?;
        let mut checklist = Self::new();
        for doc in DocumentType::ALL {
            if raw.get(doc.as_str()).copied().unwrap_or(false) {
                checklist.set(doc, true);
            }
        }
        Ok(checklist)
    }
}

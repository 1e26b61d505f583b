//! Closed vocabularies stored on a scholarship record.
//!
//! Every enum serializes to the exact display label that older stored
//! collections use (`"Not Applied"`, `"PhD"`, `"TBA"`, ...), so the JSON
//! blob stays readable across versions. `as_str()` returns the same label.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of labelled values.
///
/// Gives callers that only hold a user-typed string (CLI flags, config
/// values) a uniform way to resolve it against the canonical labels.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Every variant, in canonical order.
    fn all() -> &'static [Self];

    /// The stored label of this variant.
    fn label(self) -> &'static str;

    /// Resolve a label, ignoring ASCII case and treating `-`/`_` as spaces.
    fn parse_label(raw: &str) -> Option<Self> {
        let wanted = normalize_label(raw);
        Self::all()
            .iter()
            .copied()
            .find(|v| normalize_label(v.label()) == wanted)
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
        .collect()
}

macro_rules! impl_vocabulary {
    ($ty:ty) => {
        impl Vocabulary for $ty {
            fn all() -> &'static [Self] {
                &Self::ALL
            }

            fn label(self) -> &'static str {
                self.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// DeadlineType
// ---------------------------------------------------------------------------

/// Which deadline representation a record uses.
///
/// `Unset` is the empty string found in some stored records; it classifies
/// the same way as `Tba`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum DeadlineType {
    #[default]
    Exact,
    Month,
    Range,
    Rolling,
    #[serde(rename = "TBA")]
    Tba,
    #[serde(rename = "")]
    Unset,
}

impl DeadlineType {
    pub const ALL: [Self; 6] = [
        Self::Exact,
        Self::Month,
        Self::Range,
        Self::Rolling,
        Self::Tba,
        Self::Unset,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "Exact",
            Self::Month => "Month",
            Self::Range => "Range",
            Self::Rolling => "Rolling",
            Self::Tba => "TBA",
            Self::Unset => "",
        }
    }
}

impl_vocabulary!(DeadlineType);

// ---------------------------------------------------------------------------
// ApplicationStatus
// ---------------------------------------------------------------------------

/// Where the applicant stands with a scholarship.
///
/// ```text
/// Not Applied → Applied → Accepted
///                       → Rejected
/// ```
///
/// Transitions are not enforced; the user may set any status on save.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [
        Self::NotApplied,
        Self::Applied,
        Self::Accepted,
        Self::Rejected,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotApplied => "Not Applied",
            Self::Applied => "Applied",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Position used by the status sort order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::NotApplied => 0,
            Self::Applied => 1,
            Self::Accepted => 2,
            Self::Rejected => 3,
        }
    }
}

impl_vocabulary!(ApplicationStatus);

// ---------------------------------------------------------------------------
// DegreeType
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum DegreeType {
    #[default]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
    Undergraduate,
    Postdoc,
}

impl DegreeType {
    pub const ALL: [Self; 4] = [Self::Masters, Self::Phd, Self::Undergraduate, Self::Postdoc];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masters => "Masters",
            Self::Phd => "PhD",
            Self::Undergraduate => "Undergraduate",
            Self::Postdoc => "Postdoc",
        }
    }
}

impl_vocabulary!(DegreeType);

// ---------------------------------------------------------------------------
// LanguageRequirement
// ---------------------------------------------------------------------------

/// Language proof a scholarship accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum LanguageRequirement {
    #[default]
    #[serde(rename = "IELTS")]
    Ielts,
    #[serde(rename = "TOEFL")]
    Toefl,
    /// Medium of instruction certificate.
    #[serde(rename = "MOI")]
    Moi,
    Duolingo,
    None,
}

impl LanguageRequirement {
    pub const ALL: [Self; 5] = [
        Self::Ielts,
        Self::Toefl,
        Self::Moi,
        Self::Duolingo,
        Self::None,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ielts => "IELTS",
            Self::Toefl => "TOEFL",
            Self::Moi => "MOI",
            Self::Duolingo => "Duolingo",
            Self::None => "None",
        }
    }
}

impl_vocabulary!(LanguageRequirement);

// ---------------------------------------------------------------------------
// ReachType
// ---------------------------------------------------------------------------

/// Whether an application goes to an institution, a professor, or both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum ReachType {
    #[default]
    Institution,
    Professor,
    Both,
}

impl ReachType {
    pub const ALL: [Self; 3] = [Self::Institution, Self::Professor, Self::Both];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Institution => "Institution",
            Self::Professor => "Professor",
            Self::Both => "Both",
        }
    }
}

impl_vocabulary!(ReachType);

// ---------------------------------------------------------------------------
// SectionCategory
// ---------------------------------------------------------------------------

/// Display bucket for a record. Declaration order is the display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SectionCategory {
    Past,
    Now,
    Upcoming,
    NoDeadline,
}

impl SectionCategory {
    pub const ALL: [Self; 4] = [Self::Past, Self::Now, Self::Upcoming, Self::NoDeadline];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Past => "Past",
            Self::Now => "Now",
            Self::Upcoming => "Upcoming",
            Self::NoDeadline => "NoDeadline",
        }
    }

    /// Section header shown above the grouped records.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Past => "Past Deadlines",
            Self::Now => "Active Now (Next 30 Days)",
            Self::Upcoming => "Upcoming Applications",
            Self::NoDeadline => "No Deadline Set",
        }
    }
}

impl_vocabulary!(SectionCategory);

//! Deadline interpretation: display text, date parsing, urgency, and the
//! Past / Now / Upcoming / NoDeadline classification.
//!
//! Only `Exact` deadlines carry a date. `Month`, `Range` and `Rolling`
//! deadlines are free text and always classify as `Upcoming`; `TBA` and
//! unset deadlines classify as `NoDeadline`.
//!
//! Every date-relative query has an `_on(today)` form taking the reference
//! calendar day explicitly. The plain forms use the local date.

use chrono::{Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ScholarshipRecord;
use crate::enums::{DeadlineType, SectionCategory};

/// Format of an exact deadline, e.g. `"15/03/2026"`.
pub const DEADLINE_FORMAT: &str = "%d/%m/%Y";

/// A deadline this many days out or closer is "Now".
pub const NOW_WINDOW_DAYS: i64 = 30;

/// A deadline this many days out or closer is flagged imminent.
pub const IMMINENT_WINDOW_DAYS: i64 = 7;

const NO_DEADLINE_SET: &str = "No deadline set";

/// The local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `DD/MM/YYYY`. Single-digit day and month are accepted. Returns
/// `None` for empty text, malformed text, or impossible dates.
#[must_use]
pub fn parse_deadline(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, DEADLINE_FORMAT).ok()
}

/// How close an exact deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum DeadlineUrgency {
    Expired { days_overdue: i64 },
    /// 0 to 7 days left.
    Imminent { days_left: i64 },
    /// 8 to 30 days left.
    Approaching { days_left: i64 },
    Distant { days_left: i64 },
}

impl DeadlineUrgency {
    #[must_use]
    pub const fn from_days_left(days_left: i64) -> Self {
        if days_left < 0 {
            Self::Expired {
                days_overdue: -days_left,
            }
        } else if days_left <= IMMINENT_WINDOW_DAYS {
            Self::Imminent { days_left }
        } else if days_left <= NOW_WINDOW_DAYS {
            Self::Approaching { days_left }
        } else {
            Self::Distant { days_left }
        }
    }

    /// Short badge text for a list row. Distant deadlines get no badge.
    #[must_use]
    pub fn warning_label(self) -> Option<String> {
        match self {
            Self::Expired { .. } => Some("Expired".to_string()),
            Self::Imminent { days_left } | Self::Approaching { days_left } => {
                Some(format!("{days_left} days left"))
            }
            Self::Distant { .. } => None,
        }
    }

    /// Longer note for the detail view. Only the final week gets one.
    #[must_use]
    pub fn detail_note(self) -> Option<String> {
        match self {
            Self::Expired { .. } => Some("Deadline passed".to_string()),
            Self::Imminent { days_left: 0 } => Some("Due today".to_string()),
            Self::Imminent { days_left } => Some(format!("Due in {days_left} days")),
            Self::Approaching { .. } | Self::Distant { .. } => None,
        }
    }
}

impl ScholarshipRecord {
    /// Human-readable deadline for the record's deadline type.
    #[must_use]
    pub fn display_deadline(&self) -> String {
        let or_fallback = |text: &str| {
            if text.is_empty() {
                NO_DEADLINE_SET.to_string()
            } else {
                text.to_string()
            }
        };

        match self.deadline_type {
            DeadlineType::Exact => or_fallback(&self.deadline),
            DeadlineType::Month => or_fallback(&self.deadline_month),
            DeadlineType::Range => or_fallback(&self.deadline_range),
            DeadlineType::Rolling => "Rolling admission".to_string(),
            DeadlineType::Tba => "To be announced".to_string(),
            DeadlineType::Unset => NO_DEADLINE_SET.to_string(),
        }
    }

    /// The exact deadline date, if this is an `Exact` record with a
    /// parseable date.
    #[must_use]
    pub fn parsed_deadline(&self) -> Option<NaiveDate> {
        match self.deadline_type {
            DeadlineType::Exact => parse_deadline(&self.deadline),
            DeadlineType::Month
            | DeadlineType::Range
            | DeadlineType::Rolling
            | DeadlineType::Tba
            | DeadlineType::Unset => None,
        }
    }

    /// Deadline strictly before `today`.
    #[must_use]
    pub fn is_past_on(&self, today: NaiveDate) -> bool {
        self.parsed_deadline().is_some_and(|date| date < today)
    }

    /// Deadline between `today` and `today + 30 days`, inclusive.
    #[must_use]
    pub fn is_now_on(&self, today: NaiveDate) -> bool {
        self.parsed_deadline()
            .is_some_and(|date| date >= today && days_between(today, date) <= NOW_WINDOW_DAYS)
    }

    /// Deadline more than 30 days after `today`.
    #[must_use]
    pub fn is_upcoming_on(&self, today: NaiveDate) -> bool {
        self.parsed_deadline()
            .is_some_and(|date| days_between(today, date) > NOW_WINDOW_DAYS)
    }

    #[must_use]
    pub fn is_past(&self) -> bool {
        self.is_past_on(today())
    }

    #[must_use]
    pub fn is_now(&self) -> bool {
        self.is_now_on(today())
    }

    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        self.is_upcoming_on(today())
    }

    /// The display section this record belongs to on `today`.
    #[must_use]
    pub fn section_category_on(&self, today: NaiveDate) -> SectionCategory {
        match self.deadline_type {
            DeadlineType::Exact => {
                if self.is_past_on(today) {
                    SectionCategory::Past
                } else if self.is_now_on(today) {
                    SectionCategory::Now
                } else if self.is_upcoming_on(today) {
                    SectionCategory::Upcoming
                } else {
                    SectionCategory::NoDeadline
                }
            }
            DeadlineType::Tba | DeadlineType::Unset => SectionCategory::NoDeadline,
            DeadlineType::Month | DeadlineType::Range | DeadlineType::Rolling => {
                SectionCategory::Upcoming
            }
        }
    }

    #[must_use]
    pub fn section_category(&self) -> SectionCategory {
        self.section_category_on(today())
    }

    /// Calendar days from `today` to the exact deadline; negative once past.
    #[must_use]
    pub fn days_until_deadline_on(&self, today: NaiveDate) -> Option<i64> {
        self.parsed_deadline().map(|date| days_between(today, date))
    }

    #[must_use]
    pub fn deadline_urgency_on(&self, today: NaiveDate) -> Option<DeadlineUrgency> {
        self.days_until_deadline_on(today)
            .map(DeadlineUrgency::from_days_left)
    }

    #[must_use]
    pub fn deadline_urgency(&self) -> Option<DeadlineUrgency> {
        self.deadline_urgency_on(today())
    }
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

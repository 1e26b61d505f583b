//! Grouping into Past / Now / Upcoming / No Deadline sections.

use chrono::NaiveDate;
use serde::Serialize;

use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::SectionCategory;

/// One labelled group of records, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    pub category: SectionCategory,
    pub title: &'static str,
    pub count: usize,
    pub records: Vec<&'a ScholarshipRecord>,
}

/// Partition records by section category on `today`.
///
/// Sections come out in display order and empty ones are omitted. Records
/// keep their relative input order within a section.
pub fn group_into_sections<'a, I>(records: I, today: NaiveDate) -> Vec<Section<'a>>
where
    I: IntoIterator<Item = &'a ScholarshipRecord>,
{
    let mut buckets: [Vec<&'a ScholarshipRecord>; 4] = Default::default();
    for record in records {
        let slot = match record.section_category_on(today) {
            SectionCategory::Past => 0,
            SectionCategory::Now => 1,
            SectionCategory::Upcoming => 2,
            SectionCategory::NoDeadline => 3,
        };
        buckets[slot].push(record);
    }

    SectionCategory::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, records)| !records.is_empty())
        .map(|(category, records)| Section {
            category,
            title: category.title(),
            count: records.len(),
            records,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use scholar_core::deadline::DEADLINE_FORMAT;
    use scholar_core::enums::DeadlineType;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn due_in(name: &str, days: i64) -> ScholarshipRecord {
        ScholarshipRecord {
            deadline: (today() + Duration::days(days))
                .format(DEADLINE_FORMAT)
                .to_string(),
            ..ScholarshipRecord::new(name, "Org")
        }
    }

    fn typed(name: &str, deadline_type: DeadlineType) -> ScholarshipRecord {
        ScholarshipRecord {
            deadline_type,
            ..ScholarshipRecord::new(name, "Org")
        }
    }

    #[test]
    fn groups_in_display_order_and_skips_empty_sections() {
        let records = vec![
            typed("tba", DeadlineType::Tba),
            due_in("soon", 3),
            typed("rolling", DeadlineType::Rolling),
            due_in("later", 90),
            due_in("sooner", 1),
        ];

        let sections = group_into_sections(&records, today());
        let summary: Vec<(SectionCategory, usize, Vec<&str>)> = sections
            .iter()
            .map(|s| {
                (
                    s.category,
                    s.count,
                    s.records.iter().map(|r| r.name.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                (SectionCategory::Now, 2, vec!["soon", "sooner"]),
                (SectionCategory::Upcoming, 2, vec!["rolling", "later"]),
                (SectionCategory::NoDeadline, 1, vec!["tba"]),
            ]
        );
        assert_eq!(sections[0].title, "Active Now (Next 30 Days)");
    }

    #[test]
    fn every_record_lands_in_exactly_one_section() {
        let records = vec![
            due_in("past", -10),
            due_in("now", 10),
            due_in("upcoming", 45),
            typed("month", DeadlineType::Month),
            typed("unset", DeadlineType::Unset),
            ScholarshipRecord {
                deadline: "not a date".into(),
                ..ScholarshipRecord::new("garbled", "Org")
            },
        ];
        let sections = group_into_sections(&records, today());
        let total: usize = sections.iter().map(|s| s.count).sum();
        assert_eq!(total, records.len());
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].title, "Past Deadlines");
    }

    #[test]
    fn empty_input_has_no_sections() {
        let records: Vec<ScholarshipRecord> = Vec::new();
        assert!(group_into_sections(&records, today()).is_empty());
    }
}

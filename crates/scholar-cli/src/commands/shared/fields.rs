use scholar_core::deadline::parse_deadline;
use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::{
    ApplicationStatus, DeadlineType, DegreeType, LanguageRequirement, ReachType,
};

use crate::cli::root_commands::RecordFields;
use crate::commands::shared::parse::{parse_enum, parse_enums};

/// Copy every given flag onto `record`. Flags not given leave the field as is.
///
/// An exact deadline must be a real `DD/MM/YYYY` date; an empty value clears it.
pub fn apply_fields(record: &mut ScholarshipRecord, fields: &RecordFields) -> anyhow::Result<()> {
    if let Some(raw) = &fields.deadline_type {
        record.deadline_type = parse_enum::<DeadlineType>(raw, "deadline type")?;
    }
    if let Some(raw) = &fields.deadline {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && parse_deadline(trimmed).is_none() {
            anyhow::bail!("invalid deadline '{raw}' (expected DD/MM/YYYY)");
        }
        record.deadline = trimmed.to_string();
    }
    set_text(&mut record.deadline_month, fields.deadline_month.as_ref());
    set_text(&mut record.deadline_range, fields.deadline_range.as_ref());
    set_text(&mut record.deadline_notes, fields.deadline_notes.as_ref());

    set_flag(&mut record.tuition_covered, fields.tuition);
    set_text(&mut record.monthly_stipend, fields.stipend.as_ref());
    set_flag(&mut record.airfare_covered, fields.airfare);
    set_flag(&mut record.accommodation_covered, fields.accommodation);
    set_flag(&mut record.health_insurance_covered, fields.insurance);
    set_text(&mut record.other_benefits, fields.other_benefits.as_ref());
    set_text(&mut record.living_costs, fields.living_costs.as_ref());

    set_text(&mut record.requirements, fields.requirements.as_ref());
    set_text(&mut record.application_link, fields.link.as_ref());
    set_text(&mut record.notes, fields.notes.as_ref());

    if let Some(raw) = &fields.status {
        record.status = parse_enum::<ApplicationStatus>(raw, "status")?;
    }
    if !fields.degree.is_empty() {
        record.degree_types = parse_enums::<DegreeType, _>(&fields.degree, "degree")?;
    }
    if let Some(raw) = &fields.language {
        record.language_requirement = parse_enum::<LanguageRequirement>(raw, "language")?;
    }
    if let Some(raw) = &fields.reach {
        record.application_reach_type = parse_enum::<ReachType>(raw, "reach type")?;
    }
    Ok(())
}

fn set_text(target: &mut String, value: Option<&String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

fn set_flag(target: &mut bool, value: Option<bool>) {
    if let Some(value) = value {
        *target = value;
    }
}

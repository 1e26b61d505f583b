use anyhow::Context;
use scholar_store::SettingsStore;

use crate::cli::root_commands::UpdateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::fields::apply_fields;
use crate::context::AppContext;
use crate::output::views::DetailView;
use crate::output::{output, render_detail};

/// Handle `scholar update`.
pub fn handle<S: SettingsStore>(
    args: &UpdateArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(args, ctx, flags.format)?);
    Ok(())
}

pub fn execute<S: SettingsStore>(
    args: &UpdateArgs,
    ctx: &mut AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut record = ctx.repo.require(&args.id)?;
    if let Some(name) = &args.name {
        record.name = name.trim().to_string();
    }
    if let Some(organization) = &args.organization {
        record.organization = organization.trim().to_string();
    }
    apply_fields(&mut record, &args.fields)?;

    ctx.repo
        .update(record)
        .with_context(|| format!("failed to update scholarship {}", args.id))?;
    let stored = ctx.repo.require(&args.id)?;
    render_detail(&DetailView::new(&stored, ctx.today), format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scholar_core::entities::ScholarshipRecord;
    use scholar_core::enums::{ApplicationStatus, DeadlineType};

    use super::*;
    use crate::cli::root_commands::RecordFields;
    use crate::commands::test_support::{seed, test_context};

    #[test]
    fn changes_only_given_fields() {
        let mut ctx = test_context();
        let mut record = ScholarshipRecord::new("Vanier", "NSERC");
        record.notes = "nominated by department".into();
        let id = seed(&mut ctx, record);

        let args = UpdateArgs {
            id: id.clone(),
            name: None,
            organization: None,
            fields: RecordFields {
                status: Some("accepted".into()),
                deadline_type: Some("month".into()),
                deadline_month: Some("November 2026".into()),
                ..RecordFields::default()
            },
        };
        execute(&args, &mut ctx, OutputFormat::Json).unwrap();

        let stored = ctx.repo.require(&id).unwrap();
        assert_eq!(stored.status, ApplicationStatus::Accepted);
        assert_eq!(stored.deadline_type, DeadlineType::Month);
        assert_eq!(stored.display_deadline(), "November 2026");
        assert_eq!(stored.notes, "nominated by department");
        assert_eq!(ctx.repo.load_all().len(), 1);
    }

    #[test]
    fn clearing_organization_is_rejected() {
        let mut ctx = test_context();
        let id = seed(&mut ctx, ScholarshipRecord::new("Vanier", "NSERC"));

        let args = UpdateArgs {
            id: id.clone(),
            name: None,
            organization: Some(" ".into()),
            fields: RecordFields::default(),
        };
        assert!(execute(&args, &mut ctx, OutputFormat::Json).is_err());
        assert_eq!(ctx.repo.require(&id).unwrap().organization, "NSERC");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut ctx = test_context();
        let args = UpdateArgs {
            id: "sch-00000000".into(),
            name: Some("X".into()),
            organization: None,
            fields: RecordFields::default(),
        };
        assert!(execute(&args, &mut ctx, OutputFormat::Json).is_err());
    }
}

use anyhow::Context;
use scholar_core::entities::ScholarshipRecord;
use scholar_store::SettingsStore;

use crate::cli::root_commands::AddArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::fields::apply_fields;
use crate::context::AppContext;
use crate::output::views::DetailView;
use crate::output::{output, render_detail};

/// Handle `scholar add`.
pub fn handle<S: SettingsStore>(
    args: &AddArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(args, ctx, flags.format)?);
    Ok(())
}

pub fn execute<S: SettingsStore>(
    args: &AddArgs,
    ctx: &mut AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut record = ScholarshipRecord::new(args.name.trim(), args.organization.trim());
    apply_fields(&mut record, &args.fields)?;

    let stored = ctx.repo.add(record).context("failed to add scholarship")?;
    tracing::debug!(id = %stored.id, name = %stored.name, "added scholarship");
    render_detail(&DetailView::new(&stored, ctx.today), format)
}

use scholar_store::SettingsStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::views::DetailView;
use crate::output::{output, render_detail};

/// Handle `scholar show`.
pub fn handle<S: SettingsStore>(
    id: &str,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(id, ctx, flags.format)?);
    Ok(())
}

pub fn execute<S: SettingsStore>(
    id: &str,
    ctx: &AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let record = ctx.repo.require(id)?;
    render_detail(&DetailView::new(&record, ctx.today), format)
}

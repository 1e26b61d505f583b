use scholar_store::SettingsStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::views::RemovalView;
use crate::output::{output, render};

/// Handle `scholar delete`.
pub fn handle<S: SettingsStore>(
    id: &str,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(id, ctx, flags.format)?);
    Ok(())
}

/// Deleting an unknown id succeeds and reports nothing removed.
pub fn execute<S: SettingsStore>(
    id: &str,
    ctx: &mut AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let removed = ctx.repo.delete(id)?;
    if !removed {
        tracing::warn!(id, "no scholarship with this id");
    }
    render(
        &RemovalView {
            id: Some(id.to_string()),
            removed: usize::from(removed),
        },
        format,
    )
}

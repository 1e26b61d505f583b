use scholar_store::SettingsStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::views::RemovalView;
use crate::output::{output, render};

/// Handle `scholar clear`.
pub fn handle<S: SettingsStore>(ctx: &mut AppContext<S>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&execute(ctx, flags.format)?);
    Ok(())
}

pub fn execute<S: SettingsStore>(
    ctx: &mut AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let removed = ctx.repo.load_all().len();
    ctx.repo.clear_all()?;
    render(&RemovalView { id: None, removed }, format)
}

#[cfg(test)]
mod tests {
    use scholar_core::entities::ScholarshipRecord;

    use super::*;
    use crate::commands::test_support::{seed, test_context};

    #[test]
    fn clears_everything() {
        let mut ctx = test_context();
        seed(&mut ctx, ScholarshipRecord::new("A", "Org"));
        seed(&mut ctx, ScholarshipRecord::new("B", "Org"));

        let out = execute(&mut ctx, OutputFormat::Table).unwrap();
        assert!(out.contains("removed  2"));
        assert!(ctx.repo.load_all().is_empty());
    }
}

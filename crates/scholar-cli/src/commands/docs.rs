use std::collections::BTreeSet;

use scholar_core::documents::DocumentType;
use scholar_store::SettingsStore;

use crate::cli::root_commands::DocsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_enums;
use crate::context::AppContext;
use crate::output::views::ChecklistView;
use crate::output::{output, render};

/// Handle `scholar docs`.
pub fn handle<S: SettingsStore>(
    args: &DocsArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(args, ctx, flags.format)?);
    Ok(())
}

pub fn execute<S: SettingsStore>(
    args: &DocsArgs,
    ctx: &mut AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let prepared: BTreeSet<DocumentType> = parse_enums(&args.prepared, "document")?;
    let unprepared: BTreeSet<DocumentType> = parse_enums(&args.unprepared, "document")?;
    if prepared.is_empty() && unprepared.is_empty() {
        anyhow::bail!("nothing to change: pass --prepared or --unprepared");
    }
    if let Some(doc) = prepared.intersection(&unprepared).next() {
        anyhow::bail!("document '{doc}' cannot be both prepared and unprepared");
    }

    let mut record = ctx.repo.require(&args.id)?;
    for doc in prepared {
        record.documents_required.set(doc, true);
    }
    for doc in unprepared {
        record.documents_required.set(doc, false);
    }
    ctx.repo.update(record.clone())?;

    render(
        &ChecklistView {
            id: record.id.clone(),
            documents_summary: record.documents_summary(),
            prepared: record.prepared_documents(),
            missing: record.missing_documents(),
        },
        format,
    )
}

use scholar_core::enums::{ApplicationStatus, DegreeType, LanguageRequirement, ReachType};
use scholar_query::{DocumentReadiness, FilterSet, RecordQuery, SortKey};
use scholar_store::SettingsStore;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_enum, parse_enums};
use crate::context::AppContext;
use crate::output::views::{RecordView, SectionView};
use crate::output::{output, render_records, render_sections};

/// Handle `scholar list`.
pub fn handle<S: SettingsStore>(
    args: &ListArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(args, ctx, flags.format)?);
    Ok(())
}

pub fn execute<S: SettingsStore>(
    args: &ListArgs,
    ctx: &AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let sort = match &args.sort {
        Some(raw) => raw.parse::<SortKey>()?,
        None => ctx.config.display.sort_key()?,
    };
    let query = build_query(args, sort)?;
    let records = ctx.repo.load_all();

    if args.flat || !ctx.config.display.grouped {
        let views = query
            .run(&records)
            .into_iter()
            .map(|record| RecordView::new(record, ctx.today))
            .collect::<Vec<_>>();
        render_records(&views, format)
    } else {
        let sections = query
            .run_grouped(&records, ctx.today)
            .into_iter()
            .map(|section| SectionView::new(section, ctx.today))
            .collect::<Vec<_>>();
        render_sections(&sections, format)
    }
}

/// Translate list flags into a query. Unknown labels are errors.
pub fn build_query(args: &ListArgs, sort: SortKey) -> anyhow::Result<RecordQuery> {
    let documents = args
        .documents
        .as_deref()
        .map(|raw| parse_enum::<DocumentReadiness>(raw, "documents"))
        .transpose()?
        .into_iter()
        .collect();

    Ok(RecordQuery {
        search: args.search.clone().unwrap_or_default(),
        filters: FilterSet {
            status: parse_enums::<ApplicationStatus, _>(&args.status, "status")?,
            degree: parse_enums::<DegreeType, _>(&args.degree, "degree")?,
            language: parse_enums::<LanguageRequirement, _>(&args.language, "language")?,
            reach: parse_enums::<ReachType, _>(&args.reach, "reach type")?,
            documents,
        },
        sort,
    })
}

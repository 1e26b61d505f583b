use scholar_store::SettingsStore;

use crate::cli::root_commands::DetectArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::views::DetectionView;
use crate::output::{output, render};

/// Handle `scholar detect`.
pub fn handle<S: SettingsStore>(
    args: &DetectArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&execute(args, ctx, flags.format)?);
    Ok(())
}

/// Run detection over `--text` or the stored requirements and save the
/// reset checklist.
pub fn execute<S: SettingsStore>(
    args: &DetectArgs,
    ctx: &mut AppContext<S>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut record = ctx.repo.require(&args.id)?;
    let text = args
        .text
        .clone()
        .unwrap_or_else(|| record.requirements.clone());

    let detection = record.auto_detect_documents(&text);
    tracing::debug!(id = %record.id, matched = detection.matched.len(), "detected documents");
    ctx.repo.update(record)?;

    render(
        &DetectionView {
            id: args.id.clone(),
            matched: detection.matched.into_iter().collect(),
            documents_required: detection.checklist,
        },
        format,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scholar_core::documents::DocumentType;
    use scholar_core::entities::ScholarshipRecord;

    use super::*;
    use crate::commands::test_support::{seed, test_context};

    #[test]
    fn scans_stored_requirements_and_resets_checklist() {
        let mut ctx = test_context();
        let mut record = ScholarshipRecord::new("Chevening", "FCDO");
        record.requirements = "Please submit your CV and two LOR".into();
        record.documents_required.set(DocumentType::PassportCopy, true);
        let id = seed(&mut ctx, record);

        let args = DetectArgs {
            id: id.clone(),
            text: None,
        };
        let out = execute(&args, &mut ctx, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["matched"], serde_json::json!(["LOR", "CV"]));
        assert_eq!(value["documentsRequired"]["CV"], false);

        let stored = ctx.repo.require(&id).unwrap();
        assert_eq!(stored.documents_required.prepared_count(), 0);
    }

    #[test]
    fn explicit_text_wins() {
        let mut ctx = test_context();
        let id = seed(&mut ctx, ScholarshipRecord::new("Chevening", "FCDO"));
        let args = DetectArgs {
            id,
            text: Some("Portfolio of work samples".into()),
        };
        let out = execute(&args, &mut ctx, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["matched"], serde_json::json!(["Portfolio"]));
    }
}

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List records, grouped into deadline sections unless --flat.
    List(ListArgs),
    /// Show one record with its deadline and document status.
    Show { id: String },
    /// Add a record.
    Add(AddArgs),
    /// Update fields of a record.
    Update(UpdateArgs),
    /// Delete a record.
    Delete { id: String },
    /// Detect required documents from requirement text.
    Detect(DetectArgs),
    /// Mark documents prepared or unprepared.
    Docs(DocsArgs),
    /// Delete every record.
    Clear,
}

/// Arguments for `scholar list`.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, organization and requirements
    #[arg(long)]
    pub search: Option<String>,

    /// Application status (repeatable)
    #[arg(long)]
    pub status: Vec<String>,

    /// Degree type (repeatable)
    #[arg(long)]
    pub degree: Vec<String>,

    /// Language requirement (repeatable)
    #[arg(long)]
    pub language: Vec<String>,

    /// Application reach type (repeatable)
    #[arg(long)]
    pub reach: Vec<String>,

    /// Document readiness: all-ready, some-missing, none-ready
    #[arg(long)]
    pub documents: Option<String>,

    /// Sort key: deadline_asc, deadline_desc, name_asc, name_desc, status
    #[arg(long)]
    pub sort: Option<String>,

    /// One list instead of deadline sections
    #[arg(long)]
    pub flat: bool,
}

/// Editable record fields shared by `add` and `update`.
///
/// Every flag is optional; only the flags given change the record.
#[derive(Clone, Debug, Default, Args)]
pub struct RecordFields {
    /// Exact, Month, Range, Rolling or TBA
    #[arg(long)]
    pub deadline_type: Option<String>,
    /// Exact deadline as DD/MM/YYYY
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub deadline_month: Option<String>,
    #[arg(long)]
    pub deadline_range: Option<String>,
    #[arg(long)]
    pub deadline_notes: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub tuition: Option<bool>,
    #[arg(long)]
    pub stipend: Option<String>,
    #[arg(long, value_name = "BOOL")]
    pub airfare: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub accommodation: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub insurance: Option<bool>,
    #[arg(long)]
    pub other_benefits: Option<String>,
    #[arg(long)]
    pub living_costs: Option<String>,

    #[arg(long)]
    pub requirements: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,

    /// Not Applied, Applied, Accepted or Rejected
    #[arg(long)]
    pub status: Option<String>,
    /// Degree type (repeatable); replaces the stored list
    #[arg(long)]
    pub degree: Vec<String>,
    /// IELTS, TOEFL, MOI, Duolingo or None
    #[arg(long)]
    pub language: Option<String>,
    /// Institution, Professor or Both
    #[arg(long)]
    pub reach: Option<String>,
}

/// Arguments for `scholar add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub organization: String,
    #[command(flatten)]
    pub fields: RecordFields,
}

/// Arguments for `scholar update`.
#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub organization: Option<String>,
    #[command(flatten)]
    pub fields: RecordFields,
}

/// Arguments for `scholar detect`.
#[derive(Clone, Debug, Args)]
pub struct DetectArgs {
    pub id: String,
    /// Text to scan instead of the record's requirements
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for `scholar docs`.
#[derive(Clone, Debug, Args)]
pub struct DocsArgs {
    pub id: String,
    /// Document to mark prepared (repeatable)
    #[arg(long)]
    pub prepared: Vec<String>,
    /// Document to mark unprepared (repeatable)
    #[arg(long)]
    pub unprepared: Vec<String>,
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Show { id } => commands::show::handle(&id, ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Update(args) => commands::update::handle(&args, ctx, flags),
        Commands::Delete { id } => commands::delete::handle(&id, ctx, flags),
        Commands::Detect(args) => commands::detect::handle(&args, ctx, flags),
        Commands::Docs(args) => commands::docs::handle(&args, ctx, flags),
        Commands::Clear => commands::clear::handle(ctx, flags),
    }
}

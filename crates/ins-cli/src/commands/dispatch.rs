use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Status { action } => commands::status::handle(&action, ctx, flags).await,
        Commands::Insight { action } => commands::insight::handle(&action, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
        Commands::Diagnostics { action } => {
            commands::diagnostics::handle(&action, ctx, flags).await
        }
        Commands::Facets(args) => commands::facets::handle(&args, ctx, flags).await,
    }
}

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InsightCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ins insight`.
pub async fn handle(
    action: &InsightCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InsightCommands::Get { id } => {
            let view = ctx.service.get_insight(id).await?;
            output(&view, flags.format)
        }
    }
}

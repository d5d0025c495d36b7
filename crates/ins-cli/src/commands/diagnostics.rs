use crate::cli::GlobalFlags;
use crate::cli::subcommands::DiagnosticsCommands;
use crate::commands::shared::parse::parse_timestamp;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ins diagnostics`.
pub async fn handle(
    action: &DiagnosticsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DiagnosticsCommands::Snapshot { id } => {
            let entries = ctx.service.get_diagnostics_snapshot(id).await?;
            output(&entries, flags.format)
        }
        DiagnosticsCommands::Timeline {
            id,
            start,
            end,
            interval,
        } => {
            let start = start.as_deref().map(|raw| parse_timestamp(raw, "start")).transpose()?;
            let end = end.as_deref().map(|raw| parse_timestamp(raw, "end")).transpose()?;
            let entries = ctx
                .service
                .get_diagnostic_timeline(id, start, end, interval.as_deref())
                .await?;
            output(&entries, flags.format)
        }
    }
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::context::AppContext;
use crate::output::output_reply;

/// Handle `ins history`.
pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = ctx.service.get_status_history(&args.id).await?;
    output_reply(&reply, flags.format)
}

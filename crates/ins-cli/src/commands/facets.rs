use crate::cli::GlobalFlags;
use crate::cli::root_commands::FacetsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ins facets`.
pub async fn handle(args: &FacetsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let facets = ctx.service.activity_facets(&args.ids).await?;
    output(&facets, flags.format)
}

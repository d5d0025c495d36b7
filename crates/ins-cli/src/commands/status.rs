use anyhow::bail;
use ins_core::entities::Actor;
use ins_core::enums::{InsightStatus, SourceType};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ActorArgs, StatusCommands};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_reply};

/// Handle `ins status`.
pub async fn handle(
    action: &StatusCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StatusCommands::Set {
            id,
            status,
            actor,
            reason,
        } => {
            let requested: InsightStatus = parse_enum(status, "status")?;
            let actor = build_actor(actor)?;
            let reply = ctx
                .service
                .apply_status_change(id, requested, &actor, reason.as_deref())
                .await?;
            output_reply(&reply, flags.format)
        }
        StatusCommands::Batch {
            ids,
            status,
            actor,
            reason,
        } => {
            let requested: InsightStatus = parse_enum(status, "status")?;
            let actor = build_actor(actor)?;
            let written = ctx
                .service
                .apply_batch_status_change(ids, requested, &actor, reason.as_deref())
                .await?;
            output(&written, flags.format)
        }
    }
}

fn build_actor(args: &ActorArgs) -> anyhow::Result<Actor> {
    let source_type: SourceType = parse_enum(&args.source_type, "source-type")?;
    if args.user.is_none() && args.source_id.is_none() {
        bail!("one of --user or --source-id is required");
    }
    Ok(Actor {
        user_id: args.user.clone(),
        source_type,
        source_id: args.source_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(user: Option<&str>, source_id: Option<&str>, source_type: &str) -> ActorArgs {
        ActorArgs {
            user: user.map(str::to_string),
            source_id: source_id.map(str::to_string),
            source_type: source_type.to_string(),
        }
    }

    #[test]
    fn rules_engine_actor_from_flags() {
        let actor = build_actor(&args(None, Some("rules-engine"), "rules-engine")).unwrap();
        assert_eq!(actor.source_type, SourceType::RulesEngine);
        assert_eq!(actor.source_id.as_deref(), Some("rules-engine"));
        assert!(actor.user_id.is_none());
    }

    #[test]
    fn actor_needs_an_identity() {
        let err = build_actor(&args(None, None, "user")).unwrap_err();
        assert!(err.to_string().contains("--user or --source-id"));
    }

    #[test]
    fn unknown_source_type_is_rejected() {
        let err = build_actor(&args(Some("usr-1"), None, "robot")).unwrap_err();
        assert!(err.to_string().contains("invalid source-type 'robot'"));
    }
}

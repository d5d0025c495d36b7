use clap::{Args, Subcommand};

/// Status change commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StatusCommands {
    /// Request a status for one insight.
    Set {
        id: String,
        /// Requested status (new, open, in_progress, resolved, ignored, deleted, ...).
        #[arg(long)]
        status: String,
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Request the same status for several insights, all or nothing.
    Batch {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long)]
        status: String,
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        reason: Option<String>,
    },
}

/// Who is requesting the change. At least one of `--user` / `--source-id`.
#[derive(Clone, Debug, Args)]
pub struct ActorArgs {
    /// Requesting user ID.
    #[arg(long)]
    pub user: Option<String>,
    /// Requesting application or rules-engine ID.
    #[arg(long)]
    pub source_id: Option<String>,
    /// Source type: user, app, rules_engine.
    #[arg(long, default_value = "user")]
    pub source_type: String,
}

use clap::{Args, Subcommand};

use crate::cli::subcommands::{DiagnosticsCommands, InsightCommands, StatusCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Request status changes.
    Status {
        #[command(subcommand)]
        action: StatusCommands,
    },
    /// Inspect insights.
    Insight {
        #[command(subcommand)]
        action: InsightCommands,
    },
    /// Status history of an insight, most recent first.
    History(HistoryArgs),
    /// Dependency-graph diagnostics.
    Diagnostics {
        #[command(subcommand)]
        action: DiagnosticsCommands,
    },
    /// Activity filters matching a set of insights.
    Facets(FacetsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Insight ID.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct FacetsArgs {
    /// Insight IDs.
    #[arg(required = true)]
    pub ids: Vec<String>,
}

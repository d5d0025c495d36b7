use clap::Subcommand;

/// Insight read commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InsightCommands {
    /// Get an insight with its history counters.
    Get { id: String },
}

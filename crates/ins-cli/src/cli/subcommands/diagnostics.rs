use clap::Subcommand;

/// Dependency-graph diagnostics commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DiagnosticsCommands {
    /// Direct dependents with their latest fault start.
    Snapshot { id: String },
    /// Per-dependent occurrence timelines over a window.
    Timeline {
        id: String,
        /// Window start (RFC 3339).
        #[arg(long)]
        start: Option<String>,
        /// Window end (RFC 3339).
        #[arg(long)]
        end: Option<String>,
        /// Span length, e.g. `00.10:00:00` for ten hours.
        #[arg(long)]
        interval: Option<String>,
    },
}

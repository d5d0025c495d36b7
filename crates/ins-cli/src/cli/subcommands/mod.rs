mod diagnostics;
mod insight;
mod status;

pub use diagnostics::DiagnosticsCommands;
pub use insight::InsightCommands;
pub use status::{ActorArgs, StatusCommands};

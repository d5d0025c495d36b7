//! Entity structs for the insight domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod dependency;
mod insight;
mod occurrence;
mod status_log;

pub use dependency::Dependency;
pub use insight::Insight;
pub use occurrence::Occurrence;
pub use status_log::{Actor, StatusLogEntry};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Directed "this insight's diagnosis depends on that insight" edge.
///
/// The edge set is not guaranteed to be acyclic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Dependency {
    pub from_insight_id: String,
    pub to_insight_id: String,
    pub relationship: String,
}

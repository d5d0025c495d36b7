//! ID prefix constants and generation.
//!
//! IDs are `{prefix}-{8 hex chars}`, e.g. `log-a3f8b2c1`.

use crate::errors::CoreError;

pub const PREFIX_INSIGHT: &str = "ins";
pub const PREFIX_STATUS_LOG: &str = "log";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_INSIGHT, PREFIX_STATUS_LOG];

/// Generate a prefixed ID from 4 random bytes.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

//! ID prefix constants and random ID helpers.
//!
//! Entity IDs are `<prefix>-<8 hex chars>` drawn from the OS random source.
//! Workspace IDs follow `proj-<unix millis>` so seeded (`proj-1`) and created
//! workspaces share one shape.

use chrono::{DateTime, Utc};

use crate::errors::CoreError;

pub const PREFIX_LEAD: &str = "led";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_EVENT: &str = "evt";
pub const PREFIX_WORKSPACE: &str = "proj";

/// Generate a prefixed ID, e.g. `"led-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Random(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// Workspace ID derived from the creation time.
#[must_use]
pub fn workspace_id(now: DateTime<Utc>) -> String {
    format!("{PREFIX_WORKSPACE}-{}", now.timestamp_millis())
}

/// A uniformly distributed `u32` from the OS random source.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source is unavailable.
pub fn random_u32() -> Result<u32, CoreError> {
    getrandom::u32().map_err(|e| CoreError::Random(e.to_string()))
}

/// A random index in `0..len`. Returns 0 when `len` is 0.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source is unavailable.
pub fn random_index(len: usize) -> Result<usize, CoreError> {
    if len == 0 {
        return Ok(0);
    }
    let value = usize::try_from(random_u32()?).map_err(|e| CoreError::Other(e.into()))?;
    Ok(value % len)
}

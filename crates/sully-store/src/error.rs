//! Store error types for sully-store.

use sully_core::errors::CoreError;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A stored value no longer matches the shape the reader expects.
    #[error("Stored value under '{key}' is unreadable: {reason}")]
    Corrupt { key: String, reason: String },

    /// Referenced entity does not exist in this workspace.
    #[error("{entity_type} '{id}' not found in workspace {workspace_id}")]
    NotFound {
        entity_type: String,
        id: String,
        workspace_id: String,
    },

    /// Refused to remove the only remaining workspace.
    #[error("Cannot remove workspace '{0}': at least one workspace must remain")]
    LastWorkspace(String),

    /// Value could not be serialized for storage.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

//! # sully-store
//!
//! libSQL-backed persistence for Sully workspaces.
//!
//! Every record lives in one key/value table under a key of the form
//! `<namespace>_<entity>_<workspace_id>`. Callers never touch keys directly:
//! they receive a [`WorkspaceStore`] scoped to one workspace, or the
//! [`WorkspaceRegistry`] for the global workspace list. Both talk to storage
//! through the [`KeyValueStore`] trait, so any backend can be injected.
//!
//! Writes are last-write-wins per key. There is no cross-key transaction.

pub mod error;
pub mod keys;
pub mod kv;
mod migrations;
pub mod registry;
pub mod repos;
pub mod workspace;

mod test_support;

pub use error::StoreError;
pub use keys::WorkspaceEntity;
pub use kv::KeyValueStore;
pub use registry::WorkspaceRegistry;
pub use workspace::WorkspaceStore;

use libsql::Builder;

/// Central database handle for all Sully state.
pub struct SullyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SullyDb {
    /// Open a local database at the given path, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let sully_db = Self { db, conn };
        sully_db.run_migrations().await?;
        tracing::debug!(path, "opened workspace store");
        Ok(sully_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = SullyDb::open_local(":memory:").await.unwrap();
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["kv_entries"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = SullyDb::open_local(":memory:").await.unwrap();
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn file_backed_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sully.db");
        let path = path.to_string_lossy();

        {
            let db = SullyDb::open_local(&path).await.unwrap();
            db.set("sully_vision_proj-1", "Own the AP market").await.unwrap();
        }

        let db = SullyDb::open_local(&path).await.unwrap();
        assert_eq!(
            db.get("sully_vision_proj-1").await.unwrap().as_deref(),
            Some("Own the AP market")
        );
    }
}

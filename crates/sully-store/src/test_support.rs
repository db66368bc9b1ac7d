//! Shared test utilities for sully-store tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Arc;

    use sully_core::entities::Workspace;

    use crate::registry::WorkspaceRegistry;
    use crate::workspace::WorkspaceStore;
    use crate::{KeyValueStore, SullyDb};

    /// Open an in-memory database.
    pub async fn test_db() -> SullyDb {
        SullyDb::open_local(":memory:").await.unwrap()
    }

    /// A shared in-memory backend.
    pub async fn test_kv() -> Arc<dyn KeyValueStore> {
        Arc::new(test_db().await)
    }

    /// Registry over a fresh in-memory backend.
    pub async fn test_registry() -> WorkspaceRegistry {
        WorkspaceRegistry::new(test_kv().await, "sully")
    }

    /// A store scoped to an ad-hoc workspace with no seed data.
    pub async fn test_workspace() -> WorkspaceStore {
        scoped(test_kv().await, "proj-test", "Test Workspace")
    }

    pub fn scoped(kv: Arc<dyn KeyValueStore>, id: &str, name: &str) -> WorkspaceStore {
        WorkspaceStore::new(
            kv,
            "sully",
            Workspace {
                id: id.to_string(),
                name: name.to_string(),
                icon: "🚀".to_string(),
                color: "bg-rose-500".to_string(),
            },
        )
    }
}

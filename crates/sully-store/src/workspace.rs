//! Per-workspace repository handle.
//!
//! A [`WorkspaceStore`] can only address keys that belong to its own
//! workspace, which is what keeps workspaces isolated from each other.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use sully_core::entities::Workspace;

use crate::error::StoreError;
use crate::keys::{WorkspaceEntity, workspace_key};
use crate::kv::KeyValueStore;

/// Storage scoped to one workspace.
#[derive(Clone)]
pub struct WorkspaceStore {
    kv: Arc<dyn KeyValueStore>,
    namespace: String,
    workspace: Workspace,
}

impl std::fmt::Debug for WorkspaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceStore")
            .field("namespace", &self.namespace)
            .field("workspace", &self.workspace.id)
            .finish_non_exhaustive()
    }
}

impl WorkspaceStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, namespace: &str, workspace: Workspace) -> Self {
        Self {
            kv,
            namespace: namespace.to_string(),
            workspace,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.workspace.id
    }

    #[must_use]
    pub const fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// The storage key for one of this workspace's entities.
    #[must_use]
    pub fn key(&self, entity: WorkspaceEntity) -> String {
        workspace_key(&self.namespace, entity, &self.workspace.id)
    }

    /// Raw stored text, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub async fn get_text(&self, entity: WorkspaceEntity) -> Result<Option<String>, StoreError> {
        self.kv.get(&self.key(entity)).await
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the backend write fails.
    pub async fn set_text(&self, entity: WorkspaceEntity, value: &str) -> Result<(), StoreError> {
        self.kv.set(&self.key(entity), value).await
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the backend delete fails.
    pub async fn delete(&self, entity: WorkspaceEntity) -> Result<(), StoreError> {
        self.kv.delete(&self.key(entity)).await
    }

    /// Read and decode a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored text does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        entity: WorkspaceEntity,
    ) -> Result<Option<T>, StoreError> {
        let key = self.key(entity);
        let Some(raw) = self.kv.get(&key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key,
                reason: e.to_string(),
            })
    }

    /// Encode and write a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the backend write fails.
    pub async fn set_json<T: Serialize + Sync>(
        &self,
        entity: WorkspaceEntity,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(&self.key(entity), &raw).await
    }

    /// Delete every key this workspace owns.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any delete fails.
    pub async fn purge(&self) -> Result<(), StoreError> {
        for entity in WorkspaceEntity::ALL {
            self.delete(entity).await?;
        }
        tracing::debug!(workspace = %self.workspace.id, "purged workspace keys");
        Ok(())
    }
}

//! Global workspace list and the active-workspace pointer.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use sully_core::entities::{WORKSPACE_COLORS, WORKSPACE_ICONS, Workspace};
use sully_core::errors::CoreError;
use sully_core::ids::{random_index, workspace_id};
use sully_core::seed::default_workspaces;

use crate::error::StoreError;
use crate::keys::{ACTIVE_PROJECT, PROJECTS_LIST, global_key};
use crate::kv::KeyValueStore;
use crate::workspace::WorkspaceStore;

/// Entry point for workspace management.
///
/// Hands out [`WorkspaceStore`] handles; it is the only type that knows
/// about more than one workspace.
#[derive(Clone)]
pub struct WorkspaceRegistry {
    kv: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl WorkspaceRegistry {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, namespace: &str) -> Self {
        Self {
            kv,
            namespace: namespace.to_string(),
        }
    }

    /// All workspaces. A fresh store lists the three built-in ones.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored list is unreadable.
    pub async fn list(&self) -> Result<Vec<Workspace>, StoreError> {
        let key = global_key(&self.namespace, PROJECTS_LIST);
        let Some(raw) = self.kv.get(&key).await? else {
            return Ok(default_workspaces());
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            key,
            reason: e.to_string(),
        })
    }

    async fn save_list(&self, workspaces: &[Workspace]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(workspaces)?;
        self.kv
            .set(&global_key(&self.namespace, PROJECTS_LIST), &raw)
            .await
    }

    /// Find by exact id, then by case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing matches.
    pub async fn find(&self, id_or_name: &str) -> Result<Workspace, StoreError> {
        let workspaces = self.list().await?;
        let needle = id_or_name.trim();
        workspaces
            .iter()
            .find(|w| w.id == needle)
            .or_else(|| {
                workspaces
                    .iter()
                    .find(|w| w.name.eq_ignore_ascii_case(needle))
            })
            .cloned()
            .ok_or_else(|| not_found(needle))
    }

    /// Create a workspace with a random icon and color and make it active.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` (wrapped) for a blank name, or
    /// `StoreError` if the write fails.
    pub async fn create(&self, name: &str, now: DateTime<Utc>) -> Result<Workspace, StoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("workspace name must not be blank".into()).into());
        }
        let mut workspaces = self.list().await?;
        let workspace = Workspace::with_style(
            unused_workspace_id(now, &workspaces),
            name,
            random_index(WORKSPACE_ICONS.len())?,
            random_index(WORKSPACE_COLORS.len())?,
        );
        workspaces.push(workspace.clone());
        self.save_list(&workspaces).await?;
        self.set_active(&workspace.id).await?;
        tracing::info!(id = %workspace.id, name = %workspace.name, "created workspace");
        Ok(workspace)
    }

    /// Remove a workspace and everything it stores.
    ///
    /// When the active workspace is removed, the first remaining one becomes
    /// active.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LastWorkspace` when it is the only workspace,
    /// `StoreError::NotFound` for an unknown id.
    pub async fn remove(&self, id: &str) -> Result<Workspace, StoreError> {
        let mut workspaces = self.list().await?;
        let pos = workspaces
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| not_found(id))?;
        if workspaces.len() == 1 {
            return Err(StoreError::LastWorkspace(id.to_string()));
        }

        let was_active = self.active().await?.id == id;
        let removed = workspaces.remove(pos);
        self.save_list(&workspaces).await?;
        self.scoped(removed.clone()).purge().await?;

        if was_active {
            if let Some(first) = workspaces.first() {
                self.write_active(first).await?;
            }
        }
        tracing::info!(id = %removed.id, "removed workspace");
        Ok(removed)
    }

    /// The active workspace. Falls back to the first workspace when nothing
    /// is stored or the stored one no longer exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the list cannot be read, or
    /// `StoreError::NotFound` if the list is empty.
    pub async fn active(&self) -> Result<Workspace, StoreError> {
        let workspaces = self.list().await?;
        let stored_id = self
            .kv
            .get(&global_key(&self.namespace, ACTIVE_PROJECT))
            .await?
            .and_then(|raw| serde_json::from_str::<Workspace>(&raw).ok())
            .map(|w| w.id);

        stored_id
            .and_then(|id| workspaces.iter().find(|w| w.id == id).cloned())
            .or_else(|| workspaces.first().cloned())
            .ok_or_else(|| not_found("active"))
    }

    /// Make `id_or_name` the active workspace.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing matches.
    pub async fn set_active(&self, id_or_name: &str) -> Result<Workspace, StoreError> {
        let workspace = self.find(id_or_name).await?;
        self.write_active(&workspace).await?;
        Ok(workspace)
    }

    async fn write_active(&self, workspace: &Workspace) -> Result<(), StoreError> {
        let raw = serde_json::to_string(workspace)?;
        self.kv
            .set(&global_key(&self.namespace, ACTIVE_PROJECT), &raw)
            .await
    }

    /// A repository handle for one workspace.
    #[must_use]
    pub fn scoped(&self, workspace: Workspace) -> WorkspaceStore {
        WorkspaceStore::new(self.kv.clone(), &self.namespace, workspace)
    }
}

/// `proj-<millis>` for `now`, stepped forward a millisecond at a time past
/// ids already in `existing`.
fn unused_workspace_id(now: DateTime<Utc>, existing: &[Workspace]) -> String {
    let mut at = now;
    loop {
        let id = workspace_id(at);
        if existing.iter().all(|w| w.id != id) {
            return id;
        }
        at += TimeDelta::milliseconds(1);
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound {
        entity_type: "Workspace".to_string(),
        id: id.to_string(),
        workspace_id: "-".to_string(),
    }
}

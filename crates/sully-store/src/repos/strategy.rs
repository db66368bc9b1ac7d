//! Vision statement, shared strategy and campaign objective.

use sully_core::seed::{default_task_description, default_vision};

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// The workspace vision, or a generated default naming the workspace.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn vision(&self) -> Result<String, StoreError> {
        Ok(self
            .get_text(WorkspaceEntity::Vision)
            .await?
            .unwrap_or_else(|| default_vision(&self.workspace().name)))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn set_vision(&self, vision: &str) -> Result<(), StoreError> {
        self.set_text(WorkspaceEntity::Vision, vision).await
    }

    /// Advisor output the user chose to share with the campaign generator.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn shared_strategy(&self) -> Result<Option<String>, StoreError> {
        self.get_text(WorkspaceEntity::SharedStrategy).await
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn set_shared_strategy(&self, strategy: &str) -> Result<(), StoreError> {
        self.set_text(WorkspaceEntity::SharedStrategy, strategy).await
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn task_description(&self) -> Result<String, StoreError> {
        Ok(self
            .get_text(WorkspaceEntity::TaskDesc)
            .await?
            .unwrap_or_else(|| default_task_description(self.id()).to_string()))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn set_task_description(&self, description: &str) -> Result<(), StoreError> {
        self.set_text(WorkspaceEntity::TaskDesc, description).await
    }
}

//! Knowledge-advisor conversation, append-only per workspace.

use sully_core::entities::ChatMessage;

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored history is unreadable.
    pub async fn chat_history(&self) -> Result<Vec<ChatMessage>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::ChatHistory)
            .await?
            .unwrap_or_default())
    }

    /// Append messages to the end of the conversation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn append_chat(&self, messages: &[ChatMessage]) -> Result<(), StoreError> {
        let mut history = self.chat_history().await?;
        history.extend_from_slice(messages);
        self.set_json(WorkspaceEntity::ChatHistory, &history).await
    }
}

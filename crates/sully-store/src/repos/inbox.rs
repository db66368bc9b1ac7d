//! Replies received from leads.

use sully_core::entities::InboxReply;
use sully_core::seed::default_inbox;

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// The inbox, or the demo replies for this workspace when none is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored inbox is unreadable.
    pub async fn inbox(&self) -> Result<Vec<InboxReply>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::Inbox)
            .await?
            .unwrap_or_else(|| default_inbox(self.id())))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn save_inbox(&self, replies: &[InboxReply]) -> Result<(), StoreError> {
        self.set_json(WorkspaceEntity::Inbox, &replies).await
    }

    /// Append a reply and return its position.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn add_reply(&self, reply: InboxReply) -> Result<usize, StoreError> {
        let mut replies = self.inbox().await?;
        replies.push(reply);
        self.save_inbox(&replies).await?;
        Ok(replies.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{scoped, test_kv, test_workspace};

    #[tokio::test]
    async fn seeded_inbox_per_workspace() {
        let store = scoped(test_kv().await, "proj-1", "AP Cybersecurity");
        let inbox = store.inbox().await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].lead_id, "3");
    }

    #[tokio::test]
    async fn add_reply_appends() {
        let store = test_workspace().await;
        let idx = store
            .add_reply(InboxReply::new("led-1", "Meera", "Send pricing please"))
            .await
            .unwrap();
        assert_eq!(idx, 0);
        assert_eq!(store.inbox().await.unwrap()[0].text, "Send pricing please");
    }
}

//! Quick actions the user can assign to leads.

use sully_core::seed::default_custom_actions;

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored list is unreadable.
    pub async fn custom_actions(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::CustomActions)
            .await?
            .unwrap_or_else(|| default_custom_actions(self.id())))
    }

    /// Add an action. Blank and duplicate names are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn add_custom_action(&self, action: &str) -> Result<Vec<String>, StoreError> {
        let action = action.trim();
        let mut actions = self.custom_actions().await?;
        if !action.is_empty() && !actions.iter().any(|a| a == action) {
            actions.push(action.to_string());
            self.set_json(WorkspaceEntity::CustomActions, &actions).await?;
        }
        Ok(actions)
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn remove_custom_action(&self, action: &str) -> Result<Vec<String>, StoreError> {
        let mut actions = self.custom_actions().await?;
        actions.retain(|a| a != action);
        self.set_json(WorkspaceEntity::CustomActions, &actions).await?;
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{scoped, test_kv};

    #[tokio::test]
    async fn seeded_then_edited() {
        let store = scoped(test_kv().await, "proj-1", "AP Cybersecurity");
        assert_eq!(
            store.custom_actions().await.unwrap(),
            vec!["Security Audit", "Vulnerability Report", "Compliance Check"]
        );

        store.add_custom_action("  Pen Test ").await.unwrap();
        store.add_custom_action("Pen Test").await.unwrap();
        let actions = store.remove_custom_action("Security Audit").await.unwrap();
        assert_eq!(
            actions,
            vec!["Vulnerability Report", "Compliance Check", "Pen Test"]
        );
    }
}

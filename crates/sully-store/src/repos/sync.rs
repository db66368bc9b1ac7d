//! Last CRM sync marker, stored as plain text.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn last_sync(&self) -> Result<Option<String>, StoreError> {
        self.get_text(WorkspaceEntity::Sync).await
    }

    /// Record a sync at `now` and return the stored marker.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn mark_synced(&self, now: DateTime<Utc>) -> Result<String, StoreError> {
        let marker = now.to_rfc3339();
        self.set_text(WorkspaceEntity::Sync, &marker).await?;
        Ok(marker)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::test_support::helpers::test_workspace;

    #[tokio::test]
    async fn never_synced_then_synced() {
        let store = test_workspace().await;
        assert!(store.last_sync().await.unwrap().is_none());
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap();
        store.mark_synced(now).await.unwrap();
        assert_eq!(
            store.last_sync().await.unwrap().as_deref(),
            Some("2024-06-03T09:30:00+00:00")
        );
    }
}

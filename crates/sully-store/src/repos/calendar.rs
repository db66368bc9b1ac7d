//! Follow-up meetings, newest first.

use sully_core::entities::CalendarEvent;

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored events are unreadable.
    pub async fn calendar_events(&self) -> Result<Vec<CalendarEvent>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::CalendarEvents)
            .await?
            .unwrap_or_default())
    }

    /// Put an event at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn add_calendar_event(&self, event: CalendarEvent) -> Result<(), StoreError> {
        let mut events = vec![event];
        events.extend(self.calendar_events().await?);
        self.set_json(WorkspaceEntity::CalendarEvents, &events).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_workspace;

    fn event(id: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: "Discovery call".into(),
            start: Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap(),
            end: None,
            lead_id: Some("3".into()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn newest_event_first() {
        let store = test_workspace().await;
        store.add_calendar_event(event("evt-1")).await.unwrap();
        store.add_calendar_event(event("evt-2")).await.unwrap();
        let ids: Vec<String> = store
            .calendar_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["evt-2", "evt-1"]);
    }
}

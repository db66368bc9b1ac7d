//! Agent task board and activity log.

use sully_core::entities::{AgentLogEntry, AgentTask};

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// Tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored tasks are unreadable.
    pub async fn agent_tasks(&self) -> Result<Vec<AgentTask>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::AgentTasks)
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn save_agent_tasks(&self, tasks: &[AgentTask]) -> Result<(), StoreError> {
        self.set_json(WorkspaceEntity::AgentTasks, &tasks).await
    }

    /// Log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored log is unreadable.
    pub async fn agent_logs(&self) -> Result<Vec<AgentLogEntry>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::AgentLogs)
            .await?
            .unwrap_or_default())
    }

    /// Put `entries` ahead of the existing log, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn prepend_logs(&self, entries: Vec<AgentLogEntry>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut logs = entries;
        logs.extend(self.agent_logs().await?);
        self.set_json(WorkspaceEntity::AgentLogs, &logs).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use sully_core::enums::{AgentKind, LogKind};

    use super::*;
    use crate::test_support::helpers::test_workspace;

    fn entry(msg: &str) -> AgentLogEntry {
        AgentLogEntry {
            time: Utc::now(),
            agent: AgentKind::LeadScorer.display_name().to_string(),
            msg: msg.to_string(),
            kind: LogKind::Info,
        }
    }

    #[tokio::test]
    async fn tasks_roundtrip() {
        let store = test_workspace().await;
        let task = AgentTask::assign(
            "tsk-0000beef".into(),
            AgentKind::CampaignGen,
            "Draft intro mail",
            Utc::now(),
        );
        store.save_agent_tasks(std::slice::from_ref(&task)).await.unwrap();
        assert_eq!(store.agent_tasks().await.unwrap(), vec![task]);
    }

    #[tokio::test]
    async fn newer_logs_come_first() {
        let store = test_workspace().await;
        store.prepend_logs(vec![entry("first")]).await.unwrap();
        store.prepend_logs(vec![entry("second")]).await.unwrap();
        store.prepend_logs(Vec::new()).await.unwrap();

        let msgs: Vec<String> = store
            .agent_logs()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.msg)
            .collect();
        assert_eq!(msgs, vec!["second", "first"]);
    }
}

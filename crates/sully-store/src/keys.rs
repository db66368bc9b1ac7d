//! Storage key scheme.
//!
//! Workspace keys: `<namespace>_<entity>_<workspace_id>`.
//! Global keys: `<namespace>_<name>`.

use std::fmt;

/// Everything a workspace stores, one key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceEntity {
    LeadsData,
    CustomActions,
    Vision,
    ChatHistory,
    SharedStrategy,
    Inbox,
    TaskDesc,
    AgentTasks,
    AgentLogs,
    Sync,
    CalendarEvents,
}

impl WorkspaceEntity {
    pub const ALL: [Self; 11] = [
        Self::LeadsData,
        Self::CustomActions,
        Self::Vision,
        Self::ChatHistory,
        Self::SharedStrategy,
        Self::Inbox,
        Self::TaskDesc,
        Self::AgentTasks,
        Self::AgentLogs,
        Self::Sync,
        Self::CalendarEvents,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeadsData => "leads_data",
            Self::CustomActions => "custom_actions",
            Self::Vision => "vision",
            Self::ChatHistory => "chat_history",
            Self::SharedStrategy => "shared_strategy",
            Self::Inbox => "inbox",
            Self::TaskDesc => "task_desc",
            Self::AgentTasks => "agent_tasks",
            Self::AgentLogs => "agent_logs",
            Self::Sync => "sync",
            Self::CalendarEvents => "calendar_events",
        }
    }
}

impl fmt::Display for WorkspaceEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PROJECTS_LIST: &str = "projects_list";
pub const ACTIVE_PROJECT: &str = "active_project";

#[must_use]
pub fn workspace_key(namespace: &str, entity: WorkspaceEntity, workspace_id: &str) -> String {
    format!("{namespace}_{entity}_{workspace_id}")
}

#[must_use]
pub fn global_key(namespace: &str, name: &str) -> String {
    format!("{namespace}_{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_keys_follow_layout() {
        assert_eq!(
            workspace_key("sully", WorkspaceEntity::LeadsData, "proj-1"),
            "sully_leads_data_proj-1"
        );
        assert_eq!(
            workspace_key("sully", WorkspaceEntity::CalendarEvents, "proj-1716200000123"),
            "sully_calendar_events_proj-1716200000123"
        );
    }

    #[test]
    fn global_keys_follow_layout() {
        assert_eq!(global_key("sully", PROJECTS_LIST), "sully_projects_list");
        assert_eq!(global_key("sully", ACTIVE_PROJECT), "sully_active_project");
    }

    #[test]
    fn keys_differ_between_workspaces() {
        for entity in WorkspaceEntity::ALL {
            assert_ne!(
                workspace_key("sully", entity, "proj-1"),
                workspace_key("sully", entity, "proj-11")
            );
        }
    }
}

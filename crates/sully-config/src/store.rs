//! Workspace store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_namespace() -> String {
    "sully".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL database file. Empty means the user data dir.
    #[serde(default)]
    pub path: String,

    /// Prefix of every storage key (`<namespace>_<entity>_<workspace>`).
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            namespace: default_namespace(),
        }
    }
}

impl StoreConfig {
    /// Resolve the database path, falling back to `<data dir>/sully/sully.db`
    /// and then to `./.sully/sully.db` when no data dir exists.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".sully").join("sully.db"),
            |dir| dir.join("sully").join("sully.db"),
        )
    }

    /// Whether the store lives only in memory (tests, dry runs).
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StoreConfig::default();
        assert_eq!(config.namespace, "sully");
        assert!(config.path.is_empty());
        assert!(!config.is_in_memory());
        assert!(config.resolved_path().ends_with("sully.db"));
    }

    #[test]
    fn explicit_path_wins() {
        let config = StoreConfig {
            path: "/tmp/crm.db".into(),
            ..Default::default()
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/crm.db"));
    }

    #[test]
    fn memory_path_detected() {
        let config = StoreConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
    }
}

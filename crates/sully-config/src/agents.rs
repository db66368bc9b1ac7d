//! Agent behaviour configuration.

use serde::{Deserialize, Serialize};

/// How reply and email analysis is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyMode {
    /// Always call the hosted model.
    Live,
    /// Always use the local keyword heuristics.
    Offline,
    /// Live when an API key is configured, offline otherwise.
    #[default]
    Auto,
}

impl StrategyMode {
    /// Decide whether the live model should be used.
    #[must_use]
    pub const fn use_live(self, api_key_configured: bool) -> bool {
        match self {
            Self::Live => true,
            Self::Offline => false,
            Self::Auto => api_key_configured,
        }
    }
}

/// Default interval between simulated task progress ticks.
const fn default_tick_interval_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentsConfig {
    #[serde(default)]
    pub strategy: StrategyMode,

    /// Frame prompts for startups instead of established clients.
    #[serde(default)]
    pub startup_mode: bool,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyMode::default(),
            startup_mode: false,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AgentsConfig::default();
        assert_eq!(config.strategy, StrategyMode::Auto);
        assert!(!config.startup_mode);
        assert_eq!(config.tick_interval_ms, 1500);
    }

    #[test]
    fn strategy_resolution() {
        assert!(StrategyMode::Live.use_live(false));
        assert!(!StrategyMode::Offline.use_live(true));
        assert!(StrategyMode::Auto.use_live(true));
        assert!(!StrategyMode::Auto.use_live(false));
    }
}

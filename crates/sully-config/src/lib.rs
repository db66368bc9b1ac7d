//! # sully-config
//!
//! Layered configuration loading for Sully using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SULLY_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY` (convenience alias for `gemini.api_key`)
//! 3. Project-level `.sully/config.toml`
//! 4. User-level `~/.config/sully/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SULLY_GEMINI__API_KEY` -> `gemini.api_key`,
//! `SULLY_AGENTS__STRATEGY` -> `agents.strategy`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sully_config::SullyConfig;
//!
//! let config = SullyConfig::load_with_dotenv().expect("config");
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.pro_model);
//! }
//! ```

mod agents;
mod error;
mod gemini;
mod general;
mod store;

pub use agents::{AgentsConfig, StrategyMode};
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SullyConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub agents: AgentsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SullyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sully/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional API key variable
        figment = figment.merge(
            Env::raw()
                .only(&["GEMINI_API_KEY"])
                .map(|_| "gemini.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("SULLY_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sully").join("config.toml"))
    }

    /// Render the effective configuration as TOML with the API key masked.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Render` if serialization fails.
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let mut redacted = self.clone();
        if redacted.gemini.is_configured() {
            redacted.gemini.api_key = "********".to_string();
        }
        Ok(toml::to_string_pretty(&redacted)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.namespace.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.namespace".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = SullyConfig::default();
        assert!(!config.gemini.is_configured());
        assert_eq!(config.store.namespace, "sully");
        assert_eq!(config.agents.strategy, StrategyMode::Auto);
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn env_overrides_nested_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SULLY_GEMINI__API_KEY", "AIza-from-env");
            jail.set_env("SULLY_AGENTS__STRATEGY", "offline");
            jail.set_env("SULLY_AGENTS__STARTUP_MODE", "true");
            let config: SullyConfig = SullyConfig::figment().extract()?;
            assert_eq!(config.gemini.api_key, "AIza-from-env");
            assert_eq!(config.agents.strategy, StrategyMode::Offline);
            assert!(config.agents.startup_mode);
            Ok(())
        });
    }

    #[test]
    fn conventional_api_key_variable_is_honoured() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "AIza-plain");
            let config: SullyConfig = SullyConfig::figment().extract()?;
            assert_eq!(config.gemini.api_key, "AIza-plain");
            Ok(())
        });
    }

    #[test]
    fn prefixed_variable_beats_conventional_one() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "AIza-plain");
            jail.set_env("SULLY_GEMINI__API_KEY", "AIza-prefixed");
            let config: SullyConfig = SullyConfig::figment().extract()?;
            assert_eq!(config.gemini.api_key, "AIza-prefixed");
            Ok(())
        });
    }

    #[test]
    fn project_toml_is_merged() {
        figment::Jail::expect_with(|jail| {
            std::fs::create_dir_all(jail.directory().join(".sully"))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            jail.create_file(
                ".sully/config.toml",
                r#"
                [store]
                path = ":memory:"
                namespace = "acme"

                [general]
                default_limit = 5
                "#,
            )?;
            let config: SullyConfig = SullyConfig::figment().extract()?;
            assert!(config.store.is_in_memory());
            assert_eq!(config.store.namespace, "acme");
            assert_eq!(config.general.default_limit, 5);
            // untouched sections keep defaults
            assert_eq!(config.gemini.flash_model, "gemini-3-flash-preview");
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_empty_namespace() {
        let mut config = SullyConfig::default();
        config.store.namespace = " ".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "store.namespace"
        ));
    }

    #[test]
    fn redacted_toml_masks_key() {
        let mut config = SullyConfig::default();
        config.gemini.api_key = "AIza-secret".into();
        let rendered = config.to_redacted_toml().unwrap();
        assert!(rendered.contains("********"));
        assert!(!rendered.contains("AIza-secret"));
        assert!(rendered.contains("[agents]"));
    }
}

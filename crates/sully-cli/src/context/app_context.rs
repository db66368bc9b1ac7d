use std::sync::Arc;

use anyhow::Context;
use sully_agents::LeadPipeline;
use sully_config::SullyConfig;
use sully_core::enums::ScoringMode;
use sully_llm::{GeminiClient, TextModel};
use sully_store::{KeyValueStore, SullyDb, WorkspaceRegistry, WorkspaceStore};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SullyConfig,
    pub registry: WorkspaceRegistry,
    /// Store scoped to the workspace this invocation works in.
    pub store: WorkspaceStore,
    pub pipeline: LeadPipeline,
}

impl AppContext {
    /// Open the store, resolve the workspace and build the agent pipeline.
    pub async fn init(config: SullyConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let kv = open_store(&config).await?;
        let registry = WorkspaceRegistry::new(kv, &config.store.namespace);

        let requested = flags
            .workspace
            .clone()
            .or_else(|| Some(config.general.default_workspace.clone()).filter(|w| !w.is_empty()));
        let workspace = match requested {
            Some(id_or_name) => registry
                .find(&id_or_name)
                .await
                .with_context(|| format!("unknown workspace '{id_or_name}'"))?,
            None => registry.active().await?,
        };
        tracing::debug!(workspace = %workspace.id, "resolved workspace");
        let store = registry.scoped(workspace);

        let model = build_model(&config);
        let mode = ScoringMode::from_startup_flag(flags.startup || config.agents.startup_mode);
        let pipeline = LeadPipeline::from_config(&config, model, mode)
            .context("failed to select analysis strategy")?;

        Ok(Self {
            config,
            registry,
            store,
            pipeline,
        })
    }
}

async fn open_store(config: &SullyConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let path = if config.store.is_in_memory() {
        ":memory:".to_string()
    } else {
        let path = config.store.resolved_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        path.to_string_lossy().into_owned()
    };
    let db = SullyDb::open_local(&path)
        .await
        .with_context(|| format!("failed to open workspace store at {path}"))?;
    Ok(Arc::new(db))
}

fn build_model(config: &SullyConfig) -> Option<Arc<dyn TextModel>> {
    if !config.gemini.is_configured() {
        return None;
    }
    match GeminiClient::from_config(&config.gemini) {
        Ok(client) => Some(Arc::new(client)),
        Err(error) => {
            tracing::warn!(
                %error,
                "failed to build Gemini client; model-backed commands are unavailable"
            );
            None
        }
    }
}

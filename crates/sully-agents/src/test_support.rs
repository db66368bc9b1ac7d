//! Scripted model double for agent tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sully_core::seed::default_workspaces;
use sully_llm::{GenerateRequest, GenerateResponse, LlmError, TextModel};
use sully_store::{SullyDb, WorkspaceStore};

/// A store scoped to one of the built-in workspaces over a fresh in-memory
/// database.
pub async fn seeded_store(workspace_id: &str) -> WorkspaceStore {
    let db = SullyDb::open_local(":memory:").await.unwrap();
    let workspace = default_workspaces()
        .into_iter()
        .find(|w| w.id == workspace_id)
        .unwrap();
    WorkspaceStore::new(Arc::new(db), "sully", workspace)
}

/// Replays canned responses in order and records every request.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<GenerateResponse, LlmError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<GenerateResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    pub fn with_results(results: Vec<Result<GenerateResponse, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Shorthand for text-only answers.
    pub fn texts(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| GenerateResponse {
                    text: Some((*t).to_string()),
                    sources: Vec::new(),
                })
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> GenerateRequest {
        self.requests().pop().unwrap()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::Parse("script exhausted".into())))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

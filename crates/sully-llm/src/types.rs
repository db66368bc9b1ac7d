//! Provider-neutral request and response types.

use sully_core::entities::GroundingSource;

/// Which configured model a request should run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelTier {
    /// Fast model for condensing, classifying and copywriting.
    #[default]
    Flash,
    /// Stronger model for search-grounded research.
    Pro,
}

/// One piece of multimodal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    /// Base64 payload (no data-URL prefix).
    InlineData { mime_type: String, data: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateRequest {
    pub tier: ModelTier,
    pub parts: Vec<Part>,
    /// Attach the web-search tool so the answer carries citations.
    pub search_grounding: bool,
    /// JSON Schema the answer must conform to. Enables JSON output mode.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// A single text prompt on the given tier.
    #[must_use]
    pub fn text(tier: ModelTier, prompt: impl Into<String>) -> Self {
        Self {
            tier,
            parts: vec![Part::Text(prompt.into())],
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_search(mut self) -> Self {
        self.search_grounding = true;
        self
    }

    #[must_use]
    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    #[must_use]
    pub fn with_inline(mut self, mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        self.parts.push(Part::InlineData {
            mime_type: mime_type.into(),
            data: data.into(),
        });
        self
    }

    /// Concatenated text parts, for logging and test assertions.
    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateResponse {
    /// Model text. `None` when the API returned no candidate text.
    pub text: Option<String>,
    pub sources: Vec<GroundingSource>,
}

impl GenerateResponse {
    #[must_use]
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

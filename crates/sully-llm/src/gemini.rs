//! Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sully_config::GeminiConfig;
use sully_core::entities::GroundingSource;

use crate::error::LlmError;
use crate::http::check_response;
use crate::model::TextModel;
use crate::types::{GenerateRequest, GenerateResponse, ModelTier, Part};

/// HTTP client for the Gemini REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    flash_model: String,
    pro_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("flash_model", &self.flash_model)
            .field("pro_model", &self.pro_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] without an API key, or
    /// [`LlmError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, LlmError> {
        if !config.is_configured() {
            return Err(LlmError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("sully/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            flash_model: config.flash_model.clone(),
            pro_model: config.pro_model.clone(),
        })
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Flash => &self.flash_model,
            ModelTier::Pro => &self.pro_model,
        }
    }

    fn url_for(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint,
            urlencoding::encode(model)
        )
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let model = self.model_for(request.tier);
        let body = request_body(&request)?;
        tracing::debug!(
            model,
            search = request.search_grounding,
            json = request.response_schema.is_some(),
            "calling generateContent"
        );

        let resp = self
            .http
            .post(self.url_for(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: WireResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;
        Ok(data.into_response())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// ── Wire format ────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Serialize)]
struct WireContent {
    role: &'static str,
    parts: Vec<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_mime_type: &'static str,
    response_json_schema: Value,
}

fn request_body(request: &GenerateRequest) -> Result<WireRequest, LlmError> {
    let mut parts = Vec::with_capacity(request.parts.len());
    for part in &request.parts {
        parts.push(match part {
            Part::Text(text) => json!({ "text": text }),
            Part::InlineData { mime_type, data } => {
                STANDARD
                    .decode(data)
                    .map_err(|_| LlmError::InvalidAsset(mime_type.clone()))?;
                json!({ "inlineData": { "mimeType": mime_type, "data": data } })
            }
        });
    }

    Ok(WireRequest {
        contents: vec![WireContent {
            role: "user",
            parts,
        }],
        tools: if request.search_grounding {
            vec![json!({ "googleSearch": {} })]
        } else {
            Vec::new()
        },
        generation_config: request
            .response_schema
            .clone()
            .map(|schema| WireGenerationConfig {
                response_mime_type: "application/json",
                response_json_schema: schema,
            }),
    })
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireCandidateContent>,
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WireTextPart>,
}

#[derive(Deserialize)]
struct WireTextPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<WireChunk>,
}

#[derive(Deserialize)]
struct WireChunk {
    web: Option<WireWeb>,
}

#[derive(Deserialize)]
struct WireWeb {
    #[serde(default)]
    title: String,
    uri: String,
}

impl WireResponse {
    fn into_response(self) -> GenerateResponse {
        let Some(first) = self.candidates.into_iter().next() else {
            return GenerateResponse::default();
        };

        let texts: Vec<String> = first
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        let text = (!texts.is_empty()).then(|| texts.concat());

        let sources = first
            .grounding_metadata
            .map(|m| {
                m.grounding_chunks
                    .into_iter()
                    .filter_map(|c| c.web)
                    .map(|w| GroundingSource {
                        title: w.title,
                        uri: w.uri,
                    })
                    .collect()
            })
            .unwrap_or_default();

        GenerateResponse { text, sources }
    }
}

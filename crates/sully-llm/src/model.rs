//! The seam agents call through.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{GenerateRequest, GenerateResponse};

/// A text-generation backend.
///
/// Implemented by [`GeminiClient`](crate::GeminiClient) and by test doubles.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Run one generation request. No retries are attempted.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}

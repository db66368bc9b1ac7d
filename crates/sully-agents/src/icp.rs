//! Dynamic ICP synthesizer.

use sully_core::entities::ChatMessage;
use sully_llm::{GenerateRequest, ModelTier, TextModel};

use crate::error::AgentError;
use crate::prompts::format_icp_prompt;

/// Returned when the model answers with no text.
pub const FALLBACK_ICP: &str = "Standard B2B high-growth alignment.";

/// Condense the vision and recent strategy chat into a short list of fit
/// triggers. The answer is returned as-is.
///
/// # Errors
///
/// Returns [`AgentError::Llm`] if the model call fails. There is no retry.
pub async fn synthesize_icp(
    model: &dyn TextModel,
    vision: &str,
    history: &[ChatMessage],
) -> Result<String, AgentError> {
    let request = GenerateRequest::text(ModelTier::Flash, format_icp_prompt(vision, history));
    let response = model.generate(request).await?;
    Ok(response
        .text
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ICP.to_string()))
}

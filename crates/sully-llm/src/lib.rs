//! # sully-llm
//!
//! Generative-AI client used by the Sully agents.
//!
//! Agents depend only on the [`TextModel`] trait. [`GeminiClient`] is the
//! live implementation: one `generateContent` call per request, optionally
//! with the web-search tool and JSON-schema output mode, and with inline
//! base64 attachments for multimodal prompts. Failures are returned as
//! [`LlmError`]; nothing is retried.

mod error;
mod gemini;
mod http;
mod model;
mod types;

pub use error::LlmError;
pub use gemini::GeminiClient;
pub use model::TextModel;
pub use types::{GenerateRequest, GenerateResponse, ModelTier, Part};

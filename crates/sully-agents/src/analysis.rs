//! Reply and email analysis strategies.
//!
//! Callers hold an `Arc<dyn AnalysisStrategy>` chosen once from
//! configuration: [`LiveAnalysis`] asks the model for schema-constrained
//! JSON, [`OfflineAnalysis`] runs the local keyword heuristics.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use sully_config::StrategyMode;
use sully_core::entities::{EmailPerformance, Lead, ResponseAnalysis};
use sully_core::enums::EngagementLevel;
use sully_llm::{GenerateRequest, LlmError, ModelTier, TextModel};

use crate::error::AgentError;
use crate::heuristics;
use crate::prompts::{
    EmailContext, format_email_performance_prompt, format_response_analysis_prompt,
};

#[async_trait]
pub trait AnalysisStrategy: Send + Sync {
    /// Interpret a lead's reply against the workspace vision.
    async fn analyze_reply(
        &self,
        lead: &Lead,
        reply: &str,
        vision: &str,
    ) -> Result<ResponseAnalysis, AgentError>;

    /// Grade an email reply and propose an adjusted score.
    async fn analyze_email(&self, ctx: &EmailContext<'_>) -> Result<EmailPerformance, AgentError>;

    fn name(&self) -> &'static str;
}

/// Pick the strategy for `mode`.
///
/// # Errors
///
/// Returns [`LlmError::NotConfigured`] when `mode` is `live` and no model is
/// available.
pub fn select_strategy(
    mode: StrategyMode,
    model: Option<Arc<dyn TextModel>>,
) -> Result<Arc<dyn AnalysisStrategy>, AgentError> {
    if !mode.use_live(model.is_some()) {
        return Ok(Arc::new(OfflineAnalysis));
    }
    let model = model.ok_or(LlmError::NotConfigured)?;
    Ok(Arc::new(LiveAnalysis::new(model)))
}

// ── Offline ────────────────────────────────────────────────────────

/// Deterministic keyword heuristics. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAnalysis;

#[async_trait]
impl AnalysisStrategy for OfflineAnalysis {
    async fn analyze_reply(
        &self,
        _lead: &Lead,
        reply: &str,
        _vision: &str,
    ) -> Result<ResponseAnalysis, AgentError> {
        Ok(heuristics::analyze_reply(reply))
    }

    async fn analyze_email(&self, ctx: &EmailContext<'_>) -> Result<EmailPerformance, AgentError> {
        Ok(heuristics::analyze_email(ctx))
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

// ── Live ───────────────────────────────────────────────────────────

/// Model-backed analysis with JSON-schema output.
pub struct LiveAnalysis {
    model: Arc<dyn TextModel>,
}

impl LiveAnalysis {
    #[must_use]
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    async fn generate_json<T: DeserializeOwned + JsonSchema>(
        &self,
        agent: &'static str,
        prompt: String,
    ) -> Result<T, AgentError> {
        let mut schema =
            serde_json::to_value(schema_for!(T)).map_err(|e| AgentError::InvalidOutput {
                agent,
                reason: e.to_string(),
            })?;
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
        }
        let request = GenerateRequest::text(ModelTier::Flash, prompt).with_schema(schema);
        let response = self.model.generate(request).await?;
        serde_json::from_str(response.text_or_empty()).map_err(|e| AgentError::InvalidOutput {
            agent,
            reason: e.to_string(),
        })
    }
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct LiveReplyAnalysis {
    extracted_needs: String,
    alignment_score: f64,
    strategic_shift: String,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct LiveEmailPerformance {
    new_score: f64,
    /// One of "high", "medium" or "low".
    engagement_level: String,
    performance_report: String,
    key_indicators: Vec<String>,
}

/// Round a model-supplied number to a whole score. Negative and non-finite
/// values become 0; values above 100 are kept.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn engagement_level(raw: &str) -> Option<EngagementLevel> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "high" => Some(EngagementLevel::High),
        "medium" | "med" => Some(EngagementLevel::Medium),
        "low" => Some(EngagementLevel::Low),
        _ => None,
    }
}

#[async_trait]
impl AnalysisStrategy for LiveAnalysis {
    async fn analyze_reply(
        &self,
        lead: &Lead,
        reply: &str,
        vision: &str,
    ) -> Result<ResponseAnalysis, AgentError> {
        let wire: LiveReplyAnalysis = self
            .generate_json(
                "response analyst",
                format_response_analysis_prompt(lead, reply, vision),
            )
            .await?;
        Ok(ResponseAnalysis {
            extracted_needs: wire.extracted_needs,
            alignment_score: whole(wire.alignment_score),
            strategic_shift: wire.strategic_shift,
        })
    }

    async fn analyze_email(&self, ctx: &EmailContext<'_>) -> Result<EmailPerformance, AgentError> {
        let wire: LiveEmailPerformance = self
            .generate_json("email analyzer", format_email_performance_prompt(ctx))
            .await?;
        let level =
            engagement_level(&wire.engagement_level).ok_or_else(|| AgentError::InvalidOutput {
                agent: "email analyzer",
                reason: format!("unknown engagement level '{}'", wire.engagement_level),
            })?;
        let mut key_indicators = wire.key_indicators;
        key_indicators.truncate(3);
        Ok(EmailPerformance {
            new_score: whole(wire.new_score),
            engagement_level: level,
            performance_report: wire.performance_report,
            key_indicators,
        })
    }

    fn name(&self) -> &'static str {
        "live"
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use sully_core::enums::ScoringMode;
    use sully_core::seed::mock_leads;

    use super::*;
    use crate::test_support::ScriptedModel;

    fn ctx(email: &str) -> EmailContext<'_> {
        EmailContext {
            lead_name: "Vikram Singh",
            lead_company: "Industrial Bank of Mumbai",
            current_score: 70,
            email,
            vision: "Secure BFS in Maharashtra",
            mode: ScoringMode::Client,
        }
    }

    #[test]
    fn select_offline_without_model_in_auto() {
        let strategy = select_strategy(StrategyMode::Auto, None).unwrap();
        assert_eq!(strategy.name(), "offline");
    }

    #[test]
    fn select_live_with_model_in_auto() {
        let model: Arc<dyn TextModel> = Arc::new(ScriptedModel::texts(&[]));
        let strategy = select_strategy(StrategyMode::Auto, Some(model)).unwrap();
        assert_eq!(strategy.name(), "live");
    }

    #[test]
    fn select_offline_even_with_model() {
        let model: Arc<dyn TextModel> = Arc::new(ScriptedModel::texts(&[]));
        let strategy = select_strategy(StrategyMode::Offline, Some(model)).unwrap();
        assert_eq!(strategy.name(), "offline");
    }

    #[test]
    fn live_without_model_is_not_configured() {
        let err = select_strategy(StrategyMode::Live, None).err().unwrap();
        assert!(matches!(err, AgentError::Llm(LlmError::NotConfigured)));
    }

    #[tokio::test]
    async fn offline_reply_uses_heuristics() {
        let lead = mock_leads(Utc::now()).remove(2);
        let analysis = OfflineAnalysis
            .analyze_reply(&lead, "What's your stance on multi-cloud security?", "v")
            .await
            .unwrap();
        assert_eq!(analysis.alignment_score, 50 + 15 + 12);
    }

    #[tokio::test]
    async fn live_reply_parses_schema_output() {
        let model = Arc::new(ScriptedModel::texts(&[
            r#"{"extractedNeeds":"Encryption whitepaper","alignmentScore":81.6,"strategicShift":"Send docs"}"#,
        ]));
        let live = LiveAnalysis::new(model.clone());
        let lead = mock_leads(Utc::now()).remove(2);

        let analysis = live.analyze_reply(&lead, "whitepaper?", "v").await.unwrap();
        assert_eq!(
            analysis,
            ResponseAnalysis {
                extracted_needs: "Encryption whitepaper".into(),
                alignment_score: 82,
                strategic_shift: "Send docs".into(),
            }
        );

        let request = model.last_request();
        let schema = request.response_schema.as_ref().unwrap();
        assert!(schema.get("$schema").is_none());
        assert!(schema["properties"].get("alignmentScore").is_some());
        assert!(
            request
                .prompt_text()
                .contains("Lead: Vikram Singh from Industrial Bank of Mumbai")
        );
    }

    #[tokio::test]
    async fn live_reply_with_missing_fields_is_invalid_output() {
        let live = LiveAnalysis::new(Arc::new(ScriptedModel::texts(&["{}"])));
        let lead = mock_leads(Utc::now()).remove(0);
        let err = live.analyze_reply(&lead, "hi", "v").await.unwrap_err();
        assert!(matches!(
            err,
            AgentError::InvalidOutput {
                agent: "response analyst",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn live_email_normalizes_level_and_indicators() {
        let live = LiveAnalysis::new(Arc::new(ScriptedModel::texts(&[
            r#"{"newScore":92,"engagementLevel":"High","performanceReport":"Ready to buy.","keyIndicators":["a","b","c","d"]}"#,
        ])));
        let perf = live.analyze_email(&ctx("send the quote")).await.unwrap();
        assert_eq!(perf.new_score, 92);
        assert_eq!(perf.engagement_level, EngagementLevel::High);
        assert_eq!(perf.key_indicators.len(), 3);
    }

    #[tokio::test]
    async fn live_email_rejects_unknown_level() {
        let live = LiveAnalysis::new(Arc::new(ScriptedModel::texts(&[
            r#"{"newScore":50,"engagementLevel":"lukewarm","performanceReport":"?","keyIndicators":[]}"#,
        ])));
        let err = live.analyze_email(&ctx("ok")).await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidOutput { .. }));
    }

    #[test]
    fn whole_rounds_without_clamping_high_values() {
        assert_eq!(whole(72.4), 72);
        assert_eq!(whole(-3.0), 0);
        assert_eq!(whole(f64::NAN), 0);
        assert_eq!(whole(130.0), 130);
    }
}

//! Offline keyword heuristics for reply and email analysis.
//!
//! Both analyzers are deterministic rule tables over case-insensitive
//! substring patterns. Point deltas are additive. The strategic-shift
//! recommendation comes from a ranked table evaluated once: the
//! highest-ranked matching rule wins, whatever order the signals appear in.

use std::sync::LazyLock;

use regex::Regex;
use sully_core::entities::{EmailPerformance, ResponseAnalysis};
use sully_core::enums::{EngagementLevel, ScoringMode};

use crate::prompts::EmailContext;

fn pattern(alternatives: &str) -> Regex {
    Regex::new(&format!("(?i){alternatives}")).expect("static pattern compiles")
}

// ── Reply analysis ─────────────────────────────────────────────────

/// Starting alignment before any signal is counted.
pub const BASE_ALIGNMENT: u32 = 50;

pub const DEFAULT_NEEDS: &str = "General inquiry - needs discovery required";
pub const DEFAULT_SHIFT: &str = "Continue current engagement strategy with personalized follow-up.";

/// A reply signal: points toward alignment and, optionally, a named need.
struct SignalRule {
    pattern: Regex,
    points: u32,
    need: Option<&'static str>,
}

/// Evaluated in order; needs are reported in this order.
static SIGNAL_RULES: LazyLock<Vec<SignalRule>> = LazyLock::new(|| {
    [
        (
            "security|secure|compliance|audit|vulnerability",
            15,
            Some("Security and compliance requirements"),
        ),
        (
            "multi-cloud|cloud|infrastructure|aws|azure|gcp",
            12,
            Some("Multi-cloud or cloud infrastructure"),
        ),
        (
            "hipaa|health|medical|patient|clinical",
            15,
            Some("Healthcare compliance and data privacy"),
        ),
        (
            "api|integration|stack|system",
            10,
            Some("API integration and system connectivity"),
        ),
        (
            "omnichannel|inventory|retail|store|customer",
            15,
            Some("Omnichannel retail capabilities"),
        ),
        ("urgently|urgent|asap|soon|quarter", 10, None),
        ("help|assist|support|solution", 8, None),
        ("pricing|price|cost|budget", 12, None),
        (
            "case study|example|reference|similar",
            10,
            Some("Social proof and validation"),
        ),
    ]
    .into_iter()
    .map(|(alternatives, points, need)| SignalRule {
        pattern: pattern(alternatives),
        points,
        need,
    })
    .collect()
});

/// Strategic shift recommendations, highest priority first.
static SHIFT_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            pattern("case study|example|reference|similar"),
            "Provide industry-specific case studies and customer testimonials in next touchpoint.",
        ),
        (
            pattern("pricing|price|cost|budget"),
            "Lead is budget-conscious. Prepare ROI deck and pricing tiers before next contact.",
        ),
        (
            pattern("urgently|urgent|asap|soon|quarter"),
            "Prioritize rapid response - high urgency detected. Schedule demo within 48 hours.",
        ),
    ]
});

/// Pick the highest-ranked strategic shift for a reply.
#[must_use]
pub fn strategic_shift(reply: &str) -> &'static str {
    SHIFT_RULES
        .iter()
        .find(|(re, _)| re.is_match(reply))
        .map_or(DEFAULT_SHIFT, |(_, shift)| shift)
}

/// Analyze a lead's reply without calling a model.
#[must_use]
pub fn analyze_reply(reply: &str) -> ResponseAnalysis {
    let mut alignment = BASE_ALIGNMENT;
    let mut needs = Vec::new();
    for rule in SIGNAL_RULES.iter().filter(|r| r.pattern.is_match(reply)) {
        alignment += rule.points;
        needs.extend(rule.need);
    }

    ResponseAnalysis {
        extracted_needs: if needs.is_empty() {
            DEFAULT_NEEDS.to_string()
        } else {
            needs.join("; ")
        },
        alignment_score: alignment.min(100),
        strategic_shift: strategic_shift(reply).to_string(),
    }
}

// ── Email performance ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmailSignal {
    Scheduling,
    Pricing,
    CaseStudy,
    Urgency,
    SpecificQuestion,
}

static EMAIL_SIGNALS: LazyLock<Vec<(EmailSignal, Regex)>> = LazyLock::new(|| {
    vec![
        (
            EmailSignal::Scheduling,
            pattern("schedule|call|meeting|next week|discuss|demo"),
        ),
        (EmailSignal::Pricing, pattern("pricing|price|cost|budget|quote")),
        (
            EmailSignal::CaseStudy,
            pattern("case study|example|reference|similar"),
        ),
        (
            EmailSignal::Urgency,
            pattern("urgent|asap|this quarter|immediately|soon"),
        ),
        (
            EmailSignal::SpecificQuestion,
            pattern("how|what|can you|do you|interested"),
        ),
    ]
});

static STARTUP_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| pattern("innovate|scale|growth|experiment|pilot"));
static ENTERPRISE_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| pattern("enterprise|compliance|security|integrate"));

/// Point delta per signal.
pub const SCHEDULING_POINTS: u32 = 20;
pub const PRICING_POINTS: u32 = 15;
pub const CASE_STUDY_POINTS: u32 = 12;
pub const URGENCY_POINTS: u32 = 10;
pub const QUESTION_POINTS: u32 = 8;
pub const MODE_LANGUAGE_POINTS: u32 = 8;
pub const ACKNOWLEDGMENT_POINTS: u32 = 5;

const MAX_INDICATORS: usize = 3;

struct Detected(Vec<EmailSignal>);

impl Detected {
    fn scan(email: &str) -> Self {
        Self(
            EMAIL_SIGNALS
                .iter()
                .filter(|(_, re)| re.is_match(email))
                .map(|(signal, _)| *signal)
                .collect(),
        )
    }

    fn has(&self, signal: EmailSignal) -> bool {
        self.0.contains(&signal)
    }
}

/// Score an email reply without calling a model.
///
/// `new_score = min(100, current + delta)`.
#[must_use]
pub fn analyze_email(ctx: &EmailContext<'_>) -> EmailPerformance {
    let found = Detected::scan(ctx.email);
    let mut delta = 0;
    let mut level = EngagementLevel::Low;
    let mut indicators: Vec<String> = Vec::new();
    let mut bump = |delta: &mut u32, points: u32, floor: Option<EngagementLevel>, note: &str| {
        *delta += points;
        if let Some(floor) = floor {
            level = level.max(floor);
        }
        indicators.push(note.to_string());
    };

    if found.has(EmailSignal::Scheduling) {
        bump(
            &mut delta,
            SCHEDULING_POINTS,
            Some(EngagementLevel::High),
            "Requested scheduling/call",
        );
    }
    if found.has(EmailSignal::Pricing) {
        bump(&mut delta, PRICING_POINTS, Some(EngagementLevel::High), "Asked about pricing");
    }
    if found.has(EmailSignal::CaseStudy) {
        bump(
            &mut delta,
            CASE_STUDY_POINTS,
            Some(EngagementLevel::Medium),
            "Requested case studies/references",
        );
    }
    if found.has(EmailSignal::Urgency) {
        bump(
            &mut delta,
            URGENCY_POINTS,
            Some(EngagementLevel::Medium),
            "Expressed time sensitivity",
        );
    }
    if found.has(EmailSignal::SpecificQuestion)
        && !found.has(EmailSignal::Scheduling)
        && !found.has(EmailSignal::Pricing)
    {
        bump(
            &mut delta,
            QUESTION_POINTS,
            Some(EngagementLevel::Medium),
            "Asked detailed questions",
        );
    }
    match ctx.mode {
        ScoringMode::Startup if STARTUP_LANGUAGE.is_match(ctx.email) => {
            bump(&mut delta, MODE_LANGUAGE_POINTS, None, "Startup-oriented language");
        }
        ScoringMode::Client if ENTERPRISE_LANGUAGE.is_match(ctx.email) => {
            bump(&mut delta, MODE_LANGUAGE_POINTS, None, "Enterprise readiness signals");
        }
        _ => {}
    }
    if delta == 0 {
        bump(&mut delta, ACKNOWLEDGMENT_POINTS, None, "Polite acknowledgment");
    }

    indicators.truncate(MAX_INDICATORS);
    EmailPerformance {
        new_score: ctx.current_score.saturating_add(delta).min(100),
        engagement_level: level,
        performance_report: performance_report(ctx.lead_name, level, &found),
        key_indicators: indicators,
    }
}

fn performance_report(name: &str, level: EngagementLevel, found: &Detected) -> String {
    match level {
        EngagementLevel::High => {
            let pricing = if found.has(EmailSignal::Pricing) {
                "pricing and "
            } else {
                ""
            };
            let topic = if found.has(EmailSignal::Scheduling) {
                "scheduling"
            } else {
                "our solution"
            };
            let closing = if found.has(EmailSignal::Urgency) {
                "Time-sensitive opportunity detected."
            } else {
                "High conversion probability."
            };
            format!(
                "{name} shows strong purchase intent with specific asks about {pricing}{topic}. \
                 This lead is demonstrating active evaluation behavior and should be prioritized \
                 for immediate follow-up. {closing}"
            )
        }
        EngagementLevel::Medium => {
            let via = if found.has(EmailSignal::CaseStudy) {
                "validation requests"
            } else {
                "detailed questions"
            };
            format!(
                "{name} is demonstrating interest through {via}, indicating they are in the \
                 research phase. The response suggests genuine consideration but may need \
                 additional nurturing before decision-making. Continue engagement with \
                 educational content."
            )
        }
        EngagementLevel::Low => format!(
            "{name} provided a polite but non-committal response. While engagement is minimal, \
             the door remains open for future conversation. Recommend slower nurture cadence \
             with value-focused content to build interest over time."
        ),
    }
}

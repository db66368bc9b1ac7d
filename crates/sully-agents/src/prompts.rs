//! Prompt templates for the Sully agents.
//!
//! Each `format_*` function renders one agent's request. Client and startup
//! framing differ only in the mode-dependent fragments.

use sully_core::entities::{ChatMessage, Lead};
use sully_core::enums::ScoringMode;

/// Static baseline the ICP synthesizer refines.
pub const BASELINE_ICP: &str = "Target ICP: Mid-to-large B2B firms in India, specifically Cybersecurity, Healthcare, and Retail.
Focus regions: Andhra Pradesh, Telangana, Maharashtra.
Job titles: IT Director, CISO, VP Operations, Marketing Head.
Pain points: Fragmented workflows, manual lead nurturing, siloed CRM data.";

/// Number of trailing chat turns fed to the ICP synthesizer.
pub const ICP_HISTORY_TURNS: usize = 5;

/// Render the last few turns as `ROLE: text` lines.
#[must_use]
pub fn format_history(history: &[ChatMessage]) -> String {
    let start = history.len().saturating_sub(ICP_HISTORY_TURNS);
    history[start..]
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str().to_uppercase(), m.text))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── ICP synthesizer ────────────────────────────────────────────────

#[must_use]
pub fn format_icp_prompt(vision: &str, history: &[ChatMessage]) -> String {
    let history_text = format_history(history);
    let history_text = if history_text.is_empty() {
        "No recent pivots."
    } else {
        history_text.as_str()
    };
    format!(
        r#"You are the Sully.AI Strategy Brain.
Analyze the current Master Vision and recent strategic discussions to extract the *current* ICP requirements.

--- MASTER VISION ---
"{vision}"

--- RECENT STRATEGY CHAT ---
{history_text}

--- BASELINE ICP ---
"{BASELINE_ICP}"

Task: Output a concise, bulleted list of 3-5 specific "Fit Triggers" we are looking for right now.
Focus on nuances discussed in the chat that deviate or refine the baseline ICP."#
    )
}

// ── Lead scorer ────────────────────────────────────────────────────

const fn scorer_mode_context(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "STARTUP MODE ACTIVE: Focus on growth potential, founder quality, innovative mindset, early adopter profile, and willingness to experiment. De-prioritize budget size and established processes. Look for scrappy, fast-moving teams."
        }
        ScoringMode::Client => {
            "CLIENT MODE: Focus on established authority, budget availability, proven track record, and traditional B2B fit criteria."
        }
    }
}

const fn scorer_axes(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "Growth Potential (instead of Industry), Market Timing (instead of Location), Founder Quality (instead of Authority), Innovation Mindset (instead of Vision)"
        }
        ScoringMode::Client => "Industry, Location, Authority, and Vision",
    }
}

const fn scorer_breakdown_format(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => "GROWTH:XX, TIMING:XX, FOUNDER:XX, INNOVATION:XX",
        ScoringMode::Client => "INDUSTRY:XX, LOCATION:XX, AUTHORITY:XX, VISION:XX",
    }
}

const fn scorer_reasoning_focus(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "Focus on startup potential signals like funding, team pedigree, market opportunity."
        }
        ScoringMode::Client => "Focus on traditional B2B signals.",
    }
}

#[must_use]
pub fn format_scorer_prompt(lead: &Lead, dynamic_icp: &str, mode: ScoringMode) -> String {
    let mode_context = scorer_mode_context(mode);
    let axes = scorer_axes(mode);
    let breakdown = scorer_breakdown_format(mode);
    let focus = scorer_reasoning_focus(mode);
    let last_response = lead
        .last_response
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or("No response recorded yet.");
    format!(
        r#"Act as Sully.AI's Chief Intelligence Agent.
Evaluate this prospect's fit against our DYNAMIC STRATEGY.

{mode_context}

--- PROSPECT PROFILE ---
Lead: {name} ({title})
Company: {company}
Industry: {industry}
Location: {location}
Last Response from Prospect: "{last_response}"

--- DYNAMIC STRATEGY (CURRENT ICP) ---
"{dynamic_icp}"

--- AGENTIC TASKS ---
1. RESEARCH: Use Google Search to find recent (last 6 months) news for "{company}".
2. ALIGNMENT: Grade the lead strictly against the DYNAMIC STRATEGY provided.
3. SCORING: Provide 0-100 scores for:
   {axes}

--- RESPONSE FORMAT ---
SCORE: [Final Score]
BREAKDOWN: [{breakdown}]
REASONING: [Explain how the specific 'Dynamic Strategy' points were or weren't met based on your findings and their response. {focus} Max 50 words.]"#,
        name = lead.name,
        title = lead.title,
        company = lead.company,
        industry = lead.industry,
        location = lead.location,
    )
}

// ── Response analyst ───────────────────────────────────────────────

#[must_use]
pub fn format_response_analysis_prompt(lead: &Lead, reply: &str, vision: &str) -> String {
    format!(
        r#"Analyze this lead's direct response to our campaign.

Lead: {name} from {company}
Response: "{reply}"
Workspace Strategy: "{vision}"

Tasks:
1. Identify intent (High/Med/Low).
2. Extract specific technical or business needs.
3. Suggest a strategic pivot if necessary."#,
        name = lead.name,
        company = lead.company,
    )
}

// ── Email performance analyzer ─────────────────────────────────────

const fn email_mode_instructions(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "STARTUP MODE: Prioritize signals of innovation, speed of response, founder involvement, willingness to try new things, and growth mindset. Look for phrases indicating agility, experimentation, and forward-thinking."
        }
        ScoringMode::Client => {
            "CLIENT MODE: Prioritize traditional B2B signals like budget authority, established processes, formal timelines, and decision-making hierarchy."
        }
    }
}

const fn email_criteria(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "1. Innovation Signals (Mentions of experimentation, new approaches, growth hacking)
2. Founder Engagement (Personal involvement, quick decision-making, hands-on approach)
3. Growth Mindset (Scalability mentions, rapid expansion plans, ambitious goals)
4. Speed & Agility (Fast response time, urgency, willingness to move quickly)"
        }
        ScoringMode::Client => {
            "1. Engagement Level (Positive questions, specific requests, timeline mentions = high engagement)
2. Purchase Intent (Budget mentions, timeline, comparison shopping = high intent)
3. Business Fit (Mentions needs that align with our solution)
4. Response Quality (Detailed vs generic, professional tone)"
        }
    }
}

const fn email_score_guidance(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "Add 15-30 points for high startup potential signals, 8-20 for medium, 0-10 for low."
        }
        ScoringMode::Client => {
            "Add 10-25 points for high engagement, 5-15 for medium, 0-5 for low."
        }
    }
}

/// Inputs for email-performance analysis.
#[derive(Debug, Clone, Copy)]
pub struct EmailContext<'a> {
    pub lead_name: &'a str,
    pub lead_company: &'a str,
    pub current_score: u32,
    pub email: &'a str,
    pub vision: &'a str,
    pub mode: ScoringMode,
}

#[must_use]
pub fn format_email_performance_prompt(ctx: &EmailContext<'_>) -> String {
    let instructions = email_mode_instructions(ctx.mode);
    let criteria = email_criteria(ctx.mode);
    let guidance = email_score_guidance(ctx.mode);
    format!(
        r#"You are analyzing an email response from a lead to determine their engagement quality and update their lead score.

{instructions}

Lead: {name} from {company}
Current Score: {score}
Email Response: "{email}"
Client Vision: "{vision}"

Analyze the email response for:
{criteria}

Provide:
- newScore: Adjusted score (0-100). {guidance}
- engagementLevel: "high", "medium", or "low"
- performanceReport: Brief 2-3 sentence analysis of what this response indicates about lead quality
- keyIndicators: Array of specific phrases/signals that influenced the score (max 3)"#,
        name = ctx.lead_name,
        company = ctx.lead_company,
        score = ctx.current_score,
        email = ctx.email,
        vision = ctx.vision,
    )
}

// ── Campaign generator ─────────────────────────────────────────────

const fn campaign_tone(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            r#"Tone: Conversational, founder-to-founder, innovative, and action-oriented. Use phrases like "let's experiment", "rapid growth", "game-changing", "move fast". Keep it casual but ambitious. Appeal to their entrepreneurial spirit."#
        }
        ScoringMode::Client => {
            r#"Tone: Professional B2B, authoritative, data-driven. Use phrases like "proven ROI", "enterprise-grade", "streamlined processes". Appeal to their need for reliability and established solutions."#
        }
    }
}

/// Strategic reference used when the workspace has shared none.
#[must_use]
pub const fn default_strategic_reference(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => "Help startups scale rapidly with innovative solutions.",
        ScoringMode::Client => "Standard product-led growth.",
    }
}

#[must_use]
pub fn format_campaign_prompt(
    name: &str,
    company: &str,
    task_description: &str,
    shared_strategy: Option<&str>,
    mode: ScoringMode,
) -> String {
    let (audience, call_to_action, reference_benefits) = match mode {
        ScoringMode::Startup => (
            "founder",
            "Include a bold call-to-action that suggests experimentation or a pilot program.",
            "Reference growth potential and agility benefits.",
        ),
        ScoringMode::Client => (
            "B2B",
            "Include a clear next step (demo, call, meeting).",
            "Reference proven results and enterprise reliability.",
        ),
    };
    let reference = shared_strategy
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default_strategic_reference(mode));
    let tone = campaign_tone(mode);
    format!(
        r"Compose a high-conversion {audience} outreach email for {name} at {company}.

Objective: {task_description}
Strategic Reference: {reference}

{tone}

Requirements:
- Mention the prospect's industry signals.
- Keep it under 150 words.
- {call_to_action}
- {reference_benefits}"
    )
}

// ── Knowledge advisor ──────────────────────────────────────────────

const fn advisor_role(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "You are a BUSINESS PARTNER and co-founder advisor. Your job is to CHALLENGE assumptions, push for scalability, and suggest bold improvements. Be direct, ask hard questions, and propose alternative approaches. Think like a startup advisor who's seen 100 companies scale. Don't just validate - push them to think bigger and move faster."
        }
        ScoringMode::Client => {
            "You are a CLIENT INTERPRETER and idea preserver. Your job is to UNDERSTAND their vision, BUILD ON their existing ideas, and help them execute what they already want to do. Be supportive, validate their direction, and provide structured frameworks to implement their concepts. Think like a trusted consultant who helps refine and execute."
        }
    }
}

const fn advisor_style(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            r#"Style: Direct and challenging. Use phrases like "Hold on", "Let's challenge this", "What if instead...", "Here's a better play". Include hard questions (🔍), alternative angles (💡), and scaling strategies (🚀). Push them out of comfort zone."#
        }
        ScoringMode::Client => {
            r#"Style: Supportive and structured. Use phrases like "That's a solid direction", "I'd recommend", "This aligns well with". Include checkmarks (✓), clear frameworks, and step-by-step guidance. Build confidence in their direction."#
        }
    }
}

const fn advisor_advice(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Startup => {
            "Provide advice that:
- Questions the premise and offers alternatives
- Focuses on 10x thinking and rapid scaling
- Highlights risks they might be missing
- Suggests unconventional approaches
- Ends with a provocative question or next-level challenge"
        }
        ScoringMode::Client => {
            "Provide advice that:
- Validates and builds on their existing direction
- Offers proven frameworks and best practices
- Provides clear, actionable next steps
- Reinforces their strategic vision
- Ends with an offer to help with specific implementation"
        }
    }
}

#[must_use]
pub fn format_advisor_prompt(query: &str, vision: &str, mode: ScoringMode) -> String {
    let role = advisor_role(mode);
    let style = advisor_style(mode);
    let advice = advisor_advice(mode);
    format!(
        r#"{role}

Workspace Vision: "{vision}"

Query: "{query}"

{style}

{advice}

Use Google Search for current data if relevant. Keep response concise but impactful (150-250 words)."#
    )
}

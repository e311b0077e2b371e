//! System and user prompt construction.
//!
//! Two pure functions render the fixed auditor persona and the metric
//! payload. Every bundle lookup carries an explicit default, so missing
//! metrics degrade to "N/A"-style placeholders instead of failing.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, Category, MetricsBundle};

const SYSTEM_TEMPLATE: &str = r#"You are a senior marketing performance auditor.

Your job is to diagnose paid advertising campaigns and deliver a decisive business verdict.

You think step-by-step internally but NEVER reveal your reasoning process.

------------------------------------------------------------
STEP 1 — Diagnose Performance
Evaluate every metric.
Label each as STRONG, NORMAL, or WEAK based on industry standards.

Do not analyze metrics in isolation.
Identify relationships between them.
Explain cause-and-effect chains.

------------------------------------------------------------
STEP 2 — Identify Root Cause
Go beyond surface metrics.
Find the single biggest leverage point.
Is the problem:
- Audience
- Message
- Offer
- Budget allocation
- Landing page
- Timing

Choose ONE primary root cause.

------------------------------------------------------------
STEP 3 — Make a Decision
Give ONE clear verdict:
- Continue
- Fix
- Cut

Be decisive.

------------------------------------------------------------
IMPORTANT CONTEXT

The analysis MUST align with this campaign target:

TARGET:
{{ target }}

TARGET EXPLANATION:
{{ target_explanation }}

------------------------------------------------------------
COMMUNICATION STYLE

Write for a smart business owner.

1) First explain in plain English (no acronyms).
2) Then briefly reference technical metrics (CTR, ROAS, CAC).

Be direct.
Be blunt if money is being wasted.
Never invent data.

------------------------------------------------------------
OUTPUT RULES

Return ONLY valid JSON.
No markdown.
No explanation outside JSON.
Match the exact schema provided below:
{
"headline": "Short punchy headline summary",
"analysis": "Detailed analysis of the performance step-by-step",
"core_issue": "The one main problem",
"why_it_matters": "Business impact explanation",
"recommended_action": "Specific action to take",
"expected_outcome": "What will happen after fix",
"detected_issues": ["Issue 1", "Issue 2"],
"confidence_score": 85
}
"#;

const USER_TEMPLATE: &str = r#"BUSINESS:
(Infer business type from campaign data)
Goal: {{ goal }}

CAMPAIGN:
Name: {{ name }}
Spend: ${{ spend }}
Revenue: ${{ revenue }}
Sales: {{ sales }}
Impressions: {{ impressions }}
Clicks: {{ clicks }}

METRICS:
Click-through rate: {{ ctr }}
Conversion rate: {{ conversion_rate }}
Return on ad spend: {{ roas }}
Cost per customer: ${{ cpa }} (CPA estimated as Cost per Customer)

Return JSON:
{
"headline": "",
"analysis": "",
"core_issue": "",
"why_it_matters": "",
"recommended_action": "",
"expected_outcome": "",
"detected_issues": [],
"confidence_score": 0
}
Please audit this performance based on the metrics above.
"#;

/// Render the system prompt: auditor persona, reasoning protocol, the
/// category name, and the category explanation document verbatim.
pub fn build_system_prompt(category: &Category, explanation_text: &str) -> Result<String, AppError> {
    render(
        "system",
        SYSTEM_TEMPLATE,
        context! {
            target => category.name(),
            target_explanation => explanation_text,
        },
    )
}

/// Render the user prompt: the category as the goal plus the metric payload.
pub fn build_user_prompt(category: &Category, metrics: &MetricsBundle) -> Result<String, AppError> {
    render(
        "user",
        USER_TEMPLATE,
        context! {
            goal => category.name(),
            name => metrics.display_or("Campaign Name", "Unknown"),
            spend => metrics.display_or("Total Spend", "0"),
            revenue => metrics.display_or("Total Revenue", "0"),
            sales => metrics.display_or("Total Conversions", "0"),
            impressions => metrics.display_or("Total Impressions", "0"),
            clicks => metrics.display_or("Total Clicks", "0"),
            ctr => metrics.display_or("CTR", "N/A"),
            conversion_rate => metrics.display_or("Conversion Rate", "N/A"),
            roas => metrics.display_or("ROAS", "N/A"),
            cpa => metrics.display_or("CPA", "N/A"),
        },
    )
}

fn render(name: &str, template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, ctx).map_err(|e| AppError::PromptRender {
        template: name.to_string(),
        details: e.to_string(),
    })
}

//! Structured audit report parsing.
//!
//! The completion service is instructed to return a bare JSON object, but
//! is not guaranteed to honor that. Parsing therefore has two first-class
//! outcomes: a decoded `Report`, or the raw text carried through verbatim
//! as an opaque narrative block.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured audit report (the wire contract toward the presenter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub core_issue: String,
    #[serde(default)]
    pub why_it_matters: String,
    #[serde(default)]
    pub recommended_action: String,
    #[serde(default)]
    pub expected_outcome: String,
    #[serde(default)]
    pub detected_issues: Vec<String>,
    /// Always within 0..=100 after decoding, whatever the model sent.
    #[serde(default, deserialize_with = "confidence_from_value")]
    pub confidence_score: u8,
}

/// Result of interpreting completion-service output.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// Text decoded against the report schema.
    Structured(Report),
    /// Text that did not decode; displayed verbatim. Not an error state.
    Narrative(String),
}

/// Parse raw completion text into a report, falling back to a narrative
/// block when the text is not a valid report object.
pub fn parse_report(raw: &str) -> ReportOutcome {
    match serde_json::from_str::<Report>(raw.trim()) {
        Ok(report) => ReportOutcome::Structured(report),
        Err(_) => ReportOutcome::Narrative(raw.to_string()),
    }
}

fn confidence_from_value<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_confidence(&value))
}

/// Normalize a model-supplied confidence score.
///
/// Accepts integers, floats, and strings like "85" or "150%"; anything
/// unparseable becomes 0, and the result is clamped into 0..=100.
fn normalize_confidence(value: &Value) -> u8 {
    let score: i64 = match value {
        Value::Number(number) => {
            number.as_i64().or_else(|| number.as_f64().map(|f| f as i64)).unwrap_or(0)
        }
        Value::String(text) => {
            text.trim().trim_end_matches('%').trim().parse::<i64>().unwrap_or(0)
        }
        _ => 0,
    };
    score.clamp(0, 100) as u8
}

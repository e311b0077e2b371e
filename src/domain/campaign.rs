//! Campaign dataset model.
//!
//! The dataset is a flat table of raw counters for a single campaign.
//! Every column is optional on the wire; numeric fields are kept as raw
//! strings at this level so parsing can be forgiving about the formatting
//! quirks common in CSV exports (commas, stray spaces, text).

use serde::Deserialize;

/// One raw row of campaign counters as read from the dataset file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignRow {
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub spend: Option<String>,
    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub impressions: Option<String>,
    #[serde(default)]
    pub clicks: Option<String>,
    #[serde(default)]
    pub conversions: Option<String>,
    #[serde(default)]
    pub new_customers: Option<String>,
    #[serde(default)]
    pub customer_satisfaction_score: Option<String>,
}

impl CampaignRow {
    pub fn spend(&self) -> Option<f64> {
        parse_f64_safe(self.spend.as_deref())
    }

    pub fn revenue(&self) -> Option<f64> {
        parse_f64_safe(self.revenue.as_deref())
    }

    pub fn impressions(&self) -> Option<i64> {
        parse_i64_safe(self.impressions.as_deref())
    }

    pub fn clicks(&self) -> Option<i64> {
        parse_i64_safe(self.clicks.as_deref())
    }

    pub fn conversions(&self) -> Option<i64> {
        parse_i64_safe(self.conversions.as_deref())
    }

    pub fn new_customers(&self) -> Option<i64> {
        parse_i64_safe(self.new_customers.as_deref())
    }

    pub fn customer_satisfaction_score(&self) -> Option<f64> {
        parse_f64_safe(self.customer_satisfaction_score.as_deref())
    }
}

/// An immutable, loaded campaign dataset.
///
/// Holds the header row alongside the parsed rows: column *presence* is a
/// distinct signal from column *values* (e.g. the `new_customers` proxy
/// policy and the CSAT "not in data" sentinel both branch on presence).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<CampaignRow>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<CampaignRow>) -> Self {
        Self { columns, rows }
    }

    pub fn rows(&self) -> &[CampaignRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source file carried the named column at all.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }
}

/// Parse a string-like value into `f64`, forgiving about CSV formatting.
///
/// Trims whitespace, rejects values containing alphabetic characters, and
/// strips thousands separators before parsing. Returns `None` for anything
/// that cannot be safely parsed.
pub(crate) fn parse_f64_safe(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    if value.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    value.replace(',', "").parse::<f64>().ok()
}

pub(crate) fn parse_i64_safe(value: Option<&str>) -> Option<i64> {
    // Integer counters sometimes arrive as "50.0"; accept the float form
    // and truncate rather than dropping the value.
    parse_f64_safe(value).map(|v| v as i64)
}

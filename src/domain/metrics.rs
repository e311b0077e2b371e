//! Metric derivation for a single campaign.
//!
//! Builds a fresh, insertion-ordered bundle of named business metrics from
//! the raw dataset and the requested category. Missing columns are never an
//! error here: every derivation has a field-specific default (0, 0.0, or an
//! explicit "not available" sentinel) so the only failure mode is an absent
//! or empty dataset.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::{Category, Dataset};

/// Metric derivation error, signaled as a value so the presenter can render
/// a user-facing message instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// Dataset was absent or carried no rows.
    #[error("No data available")]
    NoData,
}

/// A single metric value: a number, an integer count, or pre-formatted text
/// (percentages and "not available" sentinels).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Count(i64),
    Text(String),
}

impl MetricValue {
    /// Numeric view for presenters that format their own cards.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(value) => Some(*value),
            MetricValue::Count(value) => Some(*value as f64),
            MetricValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(value) => write!(f, "{}", format_float(*value)),
            MetricValue::Count(value) => write!(f, "{}", value),
            MetricValue::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Named metrics for one audit run, in insertion order.
///
/// Always contains the base key set (campaign name, totals, CPA, rates,
/// ROAS) regardless of category; category-specific keys are appended after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsBundle {
    entries: Vec<(String, MetricValue)>,
}

impl MetricsBundle {
    /// Insert a metric, replacing an existing value in place if the key is
    /// already present (keeps ordering stable across re-asserts).
    pub fn insert(&mut self, name: impl Into<String>, value: MetricValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    /// Displayed value for a metric, or the given default when absent.
    ///
    /// This is the lookup the prompt builder uses; it must never fail.
    pub fn display_or(&self, name: &str, default: &str) -> String {
        self.get(name).map(|value| value.to_string()).unwrap_or_else(|| default.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetricsBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Derive the metric bundle for a category from the loaded dataset.
///
/// Pure function of its inputs. The dataset is expected to hold a single
/// aggregated row; if multiple rows exist they are summed as if one.
pub fn compute_metrics(
    category: &Category,
    dataset: &Dataset,
) -> Result<MetricsBundle, MetricsError> {
    if dataset.is_empty() {
        return Err(MetricsError::NoData);
    }

    let rows = dataset.rows();

    let total_spend: f64 = rows.iter().map(|row| row.spend().unwrap_or(0.0)).sum();
    let total_revenue: f64 = rows.iter().map(|row| row.revenue().unwrap_or(0.0)).sum();
    let total_impressions: i64 = rows.iter().map(|row| row.impressions().unwrap_or(0)).sum();
    let total_clicks: i64 = rows.iter().map(|row| row.clicks().unwrap_or(0)).sum();
    let total_conversions: i64 = rows.iter().map(|row| row.conversions().unwrap_or(0)).sum();

    // Proxy policy: without a new_customers column, conversions stand in for
    // new customers. Intentional approximation carried over from the source
    // data contract; CPA below is computed against this figure either way.
    let total_new_customers: i64 = if dataset.has_column("new_customers") {
        rows.iter().map(|row| row.new_customers().unwrap_or(0)).sum()
    } else {
        total_conversions
    };

    let campaign_name = rows
        .first()
        .and_then(|row| row.campaign_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Unknown Campaign")
        .to_string();

    let mut metrics = MetricsBundle::default();
    metrics.insert("Campaign Name", MetricValue::Text(campaign_name));
    metrics.insert("Total Spend", MetricValue::Number(total_spend));
    metrics.insert("Total Revenue", MetricValue::Number(total_revenue));
    metrics.insert("Total Impressions", MetricValue::Count(total_impressions));
    metrics.insert("Total Clicks", MetricValue::Count(total_clicks));
    metrics.insert("Total Conversions", MetricValue::Count(total_conversions));
    metrics.insert("Total New Customers", MetricValue::Count(total_new_customers));

    let cpa = if total_new_customers > 0 {
        round2(total_spend / total_new_customers as f64)
    } else {
        0.0
    };
    metrics.insert("CPA", MetricValue::Number(cpa));

    let conversion_rate = if total_clicks > 0 {
        format_percent(total_conversions as f64 / total_clicks as f64 * 100.0)
    } else {
        "0%".to_string()
    };
    metrics.insert("Conversion Rate", MetricValue::Text(conversion_rate));

    let ctr = if total_impressions > 0 {
        format_percent(total_clicks as f64 / total_impressions as f64 * 100.0)
    } else {
        "0%".to_string()
    };
    metrics.insert("CTR", MetricValue::Text(ctr));

    let roas = if total_spend > 0.0 { round2(total_revenue / total_spend) } else { 0.0 };
    metrics.insert("ROAS", MetricValue::Number(roas));

    match category {
        Category::CustomerAcquisition => {
            // Acquisition runs key off the new-customer figure; re-assert it
            // explicitly even though the base bundle already carries it.
            metrics.insert("Total New Customers", MetricValue::Count(total_new_customers));
        }
        Category::CustomerSatisfaction => {
            if dataset.has_column("customer_satisfaction_score") {
                let scores: Vec<f64> =
                    rows.iter().filter_map(|row| row.customer_satisfaction_score()).collect();
                metrics.insert("Average CSAT Score", MetricValue::Number(round2(average(&scores))));
            } else {
                metrics
                    .insert("Average CSAT Score", MetricValue::Text("N/A (Not in data)".to_string()));
            }
        }
        Category::RevenueGrowth => {
            // ROAS and revenue in the base bundle already cover this category.
        }
        Category::CustomerRetention => {
            // The dataset schema carries no retention columns. Known schema
            // gap, surfaced as explicit sentinels rather than omitted keys.
            metrics.insert("Retention Volume", MetricValue::Text("Data Not Available".to_string()));
            metrics
                .insert("Average Churn Rate", MetricValue::Text("Data Not Available".to_string()));
        }
        Category::Other(_) => {
            metrics.insert("info", MetricValue::Text("General category, showing summary.".to_string()));
        }
    }

    Ok(metrics)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Render a float the way the report surface expects: integral values keep
/// one decimal place ("5.0"), everything else uses the shortest form.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Percentage string rounded to two decimals, e.g. "5.0%" or "12.35%".
fn format_percent(value: f64) -> String {
    format!("{}%", format_float(round2(value)))
}

//! Pure domain types and logic: categories, campaign data, metric
//! derivation, report parsing, and run configuration.

mod campaign;
mod category;
mod config;
mod error;
mod metrics;
mod report;

pub use campaign::{CampaignRow, Dataset};
pub use category::Category;
pub use config::{CompletionConfig, DataConfig, PromptsConfig, RunConfig};
pub use error::AppError;
pub use metrics::{MetricValue, MetricsBundle, MetricsError, compute_metrics};
pub use report::{Report, ReportOutcome, parse_report};

//! adaudit: Audit single-campaign marketing performance and generate an
//! LLM-backed business verdict.
//!
//! One category selection triggers one synchronous pipeline run: load the
//! dataset, derive metrics, build the prompt pair, call the completion
//! service, parse the report. The completion call is the only blocking
//! operation of note; it is attempted once and any failure is carried
//! forward as displayable text rather than an error. Nothing is cached
//! between runs.

pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use domain::{RunConfig, compute_metrics, parse_report};
use ports::{ExplanationStore, get_completion};
use services::{
    EmbeddedExplanationStore, FilesystemExplanationStore, HttpCompletionClient,
    build_system_prompt, build_user_prompt, load_dataset,
};

pub use domain::{
    AppError, Category, MetricValue, MetricsBundle, Report, ReportOutcome,
};

/// Options for a full audit run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Category to audit.
    pub category: Category,
    /// Dataset path override; defaults to the configured path.
    pub data_path: Option<PathBuf>,
    /// Config file override; defaults to `adaudit.toml` in the working directory.
    pub config_path: Option<PathBuf>,
    /// Build prompts but skip the completion call.
    pub dry_run: bool,
}

/// Options for a metrics-only run.
#[derive(Debug, Clone)]
pub struct MetricsOptions {
    pub category: Category,
    pub data_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

/// Result of an audit run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub category: Category,
    pub metrics: MetricsBundle,
    pub system_prompt: String,
    pub user_prompt: String,
    /// Raw completion text; `None` on dry runs.
    pub raw_response: Option<String>,
    /// Parsed report; `None` on dry runs.
    pub report: Option<ReportOutcome>,
}

/// Run the full audit pipeline for a category.
///
/// Fails before prompt building when the dataset is missing or empty; a
/// completion-service failure does not fail the run, it surfaces as the
/// sentinel text inside a narrative report.
pub fn analyze(options: &AnalyzeOptions) -> Result<AnalysisOutcome, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let data_path = options.data_path.clone().unwrap_or_else(|| config.data.path.clone());

    let dataset = load_dataset(&data_path)?;
    let metrics = compute_metrics(&options.category, &dataset)?;

    let explanation = explanation_store(&config).load(&options.category);
    let system_prompt = build_system_prompt(&options.category, &explanation)?;
    let user_prompt = build_user_prompt(&options.category, &metrics)?;

    let (raw_response, report) = if options.dry_run {
        (None, None)
    } else {
        let client = HttpCompletionClient::from_env_with_config(&config.completion)?;
        let raw = get_completion(&client, &system_prompt, &user_prompt);
        let outcome = parse_report(&raw);
        (Some(raw), Some(outcome))
    };

    Ok(AnalysisOutcome {
        category: options.category.clone(),
        metrics,
        system_prompt,
        user_prompt,
        raw_response,
        report,
    })
}

/// Compute the metric bundle only, without touching the completion service.
pub fn metrics(options: &MetricsOptions) -> Result<MetricsBundle, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let data_path = options.data_path.clone().unwrap_or_else(|| config.data.path.clone());

    let dataset = load_dataset(&data_path)?;
    Ok(compute_metrics(&options.category, &dataset)?)
}

fn load_config(path: Option<&Path>) -> Result<RunConfig, AppError> {
    match path {
        Some(path) => RunConfig::load(path),
        None => RunConfig::load_default(),
    }
}

fn explanation_store(config: &RunConfig) -> Box<dyn ExplanationStore> {
    match &config.prompts.dir {
        Some(dir) => Box::new(FilesystemExplanationStore::new(dir.clone())),
        None => Box::new(EmbeddedExplanationStore::new()),
    }
}

//! Run configuration loaded from `adaudit.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "adaudit.toml";

/// Configuration for an audit run.
///
/// Every section and field has a default, so a missing config file is not
/// an error; only a malformed one is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    /// Completion service settings.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Dataset location.
    #[serde(default)]
    pub data: DataConfig,
    /// Explanation document overrides.
    #[serde(default)]
    pub prompts: PromptsConfig,
}

impl RunConfig {
    /// Load configuration from the given file, or defaults when absent.
    pub fn load(path: &Path) -> Result<RunConfig, AppError> {
        if !path.exists() {
            return Ok(RunConfig::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `adaudit.toml` from the working directory, or defaults.
    pub fn load_default() -> Result<RunConfig, AppError> {
        RunConfig::load(Path::new(CONFIG_FILE))
    }
}

/// Completion service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; kept low for deterministic-leaning audits.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("default completion endpoint URL is valid")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_timeout() -> u64 {
    30
}

/// Dataset location configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the campaign CSV file.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/campaign_data.csv")
}

/// Explanation document configuration.
///
/// When `dir` is set, explanation documents are read from that directory
/// instead of the embedded defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptsConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Select;

use adaudit::{
    AnalyzeOptions, AppError, Category, MetricValue, MetricsBundle, MetricsOptions, ReportOutcome,
};

#[derive(Parser)]
#[command(name = "adaudit")]
#[command(version)]
#[command(
    about = "Audit single-campaign marketing performance with an LLM-backed verdict",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full audit pipeline for a category
    #[clap(visible_alias = "a")]
    Analyze {
        /// Category name; prompts interactively when omitted
        #[arg(short, long)]
        category: Option<String>,
        /// Dataset path override
        #[arg(long)]
        data: Option<PathBuf>,
        /// Config file override
        #[arg(long)]
        config: Option<PathBuf>,
        /// Show prompts without calling the completion service
        #[arg(long)]
        dry_run: bool,
    },
    /// Compute and print the metric bundle for a category
    #[clap(visible_alias = "m")]
    Metrics {
        /// Category name; prompts interactively when omitted
        #[arg(short, long)]
        category: Option<String>,
        /// Dataset path override
        #[arg(long)]
        data: Option<PathBuf>,
        /// Config file override
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the known categories
    Categories,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Analyze { category, data, config, dry_run } => {
            run_analyze(category, data, config, dry_run)
        }
        Commands::Metrics { category, data, config, json } => {
            run_metrics(category, data, config, json)
        }
        Commands::Categories => {
            for category in &Category::KNOWN {
                println!("{}", category);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_analyze(
    category: Option<String>,
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), AppError> {
    let category = resolve_category(category)?;
    println!("Analysis: {}", category);

    let outcome = adaudit::analyze(&AnalyzeOptions {
        category,
        data_path: data,
        config_path: config,
        dry_run,
    })?;

    render_metric_cards(&outcome.metrics);

    if dry_run {
        println!("\n--- System prompt ---\n{}", outcome.system_prompt);
        println!("\n--- User prompt ---\n{}", outcome.user_prompt);
        return Ok(());
    }

    if let Some(report) = &outcome.report {
        render_report(report);
    }
    Ok(())
}

fn run_metrics(
    category: Option<String>,
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<(), AppError> {
    let category = resolve_category(category)?;
    let bundle = adaudit::metrics(&MetricsOptions {
        category: category.clone(),
        data_path: data,
        config_path: config,
    })?;

    if json {
        let encoded = serde_json::to_string_pretty(&bundle)
            .map_err(|e| AppError::Configuration(format!("Failed to encode metrics: {}", e)))?;
        println!("{}", encoded);
    } else {
        println!("Metrics: {}", category);
        for (name, value) in bundle.iter() {
            println!("  {}: {}", name, value);
        }
    }
    Ok(())
}

fn resolve_category(input: Option<String>) -> Result<Category, AppError> {
    match input {
        Some(name) => Ok(Category::from_input(&name)),
        None => {
            let names: Vec<&str> = Category::KNOWN.iter().map(Category::name).collect();
            let selection = Select::new()
                .with_prompt("Choose a category to analyze")
                .items(&names)
                .default(0)
                .interact()
                .map_err(|e| AppError::Configuration(format!("Category selection failed: {}", e)))?;
            Ok(Category::KNOWN[selection].clone())
        }
    }
}

/// The four headline cards the report surface leads with.
fn render_metric_cards(metrics: &MetricsBundle) {
    println!("\nKey Metrics");
    println!("  Campaign Name:       {}", metrics.display_or("Campaign Name", "Unknown"));
    println!("  Total New Customers: {}", metrics.display_or("Total New Customers", "0"));
    println!("  Total Revenue:       {}", format_usd(metrics.get("Total Revenue")));
    println!("  Total Spend:         {}", format_usd(metrics.get("Total Spend")));
}

fn render_report(outcome: &ReportOutcome) {
    println!("\nAI Evaluation Report");
    match outcome {
        ReportOutcome::Structured(report) => {
            let headline =
                if report.headline.is_empty() { "Analysis Report" } else { &report.headline };
            println!("{}", headline);
            println!("\nAnalysis:\n{}", report.analysis);
            println!("\nCore Issue:\n{}", report.core_issue);
            println!("\nWhy it matters:\n{}", report.why_it_matters);
            println!("\nRecommended Action:\n{}", report.recommended_action);
            println!("\nExpected Outcome:\n{}", report.expected_outcome);
            println!("\nConfidence Score: {}%", report.confidence_score);
            if !report.detected_issues.is_empty() {
                println!("\nDetected Issues:");
                for issue in &report.detected_issues {
                    println!("- {}", issue);
                }
            }
        }
        ReportOutcome::Narrative(text) => {
            println!("{}", text);
        }
    }
}

/// Whole-dollar rendering with thousands separators, e.g. "$3,000".
fn format_usd(value: Option<&MetricValue>) -> String {
    match value.and_then(MetricValue::as_f64) {
        Some(number) => format!("${}", group_thousands(number.round() as i64)),
        None => value.map(|v| v.to_string()).unwrap_or_else(|| "$0".to_string()),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        grouped.push(digit);
        if remaining > 1 && (remaining - 1) % 3 == 0 {
            grouped.push(',');
        }
    }
    if value < 0 { format!("-{}", grouped) } else { grouped }
}

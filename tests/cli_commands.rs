mod common;

use common::{SCENARIO_CSV, TestContext};
use predicates::prelude::*;

#[test]
fn categories_lists_the_four_known_categories() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Acquisition"))
        .stdout(predicate::str::contains("Customer Satisfaction"))
        .stdout(predicate::str::contains("Revenue Growth"))
        .stdout(predicate::str::contains("Customer Retention"));
}

#[test]
fn metrics_renders_the_derived_bundle() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    ctx.cli()
        .args(["metrics", "--category", "Customer Acquisition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Campaign Name: Spring Sale"))
        .stdout(predicate::str::contains("Total New Customers: 50"))
        .stdout(predicate::str::contains("CPA: 20.0"))
        .stdout(predicate::str::contains("CTR: 5.0%"))
        .stdout(predicate::str::contains("Conversion Rate: 10.0%"))
        .stdout(predicate::str::contains("ROAS: 3.0"));
}

#[test]
fn metrics_json_emits_the_bundle_as_an_object() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    let assert = ctx
        .cli()
        .args(["metrics", "--category", "Revenue Growth", "--json"])
        .assert()
        .success();
    let output = &assert.get_output().stdout;

    let parsed: serde_json::Value = serde_json::from_slice(output).unwrap();
    assert_eq!(parsed["Campaign Name"], "Spring Sale");
    assert_eq!(parsed["CPA"], 20.0);
    assert_eq!(parsed["CTR"], "5.0%");
    assert_eq!(parsed["ROAS"], 3.0);
}

#[test]
fn metrics_for_retention_always_carries_sentinels() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    ctx.cli()
        .args(["metrics", "--category", "Customer Retention"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retention Volume: Data Not Available"))
        .stdout(predicate::str::contains("Average Churn Rate: Data Not Available"));
}

#[test]
fn metrics_for_unknown_category_adds_info_marker() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    ctx.cli()
        .args(["metrics", "--category", "Brand Awareness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("info: General category, showing summary."));
}

#[test]
fn metrics_fails_cleanly_when_dataset_is_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["metrics", "--category", "Revenue Growth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}

#[test]
fn metrics_fails_cleanly_when_dataset_is_empty() {
    let ctx = TestContext::new();
    ctx.write_dataset("campaign_name,spend,revenue\n");

    ctx.cli()
        .args(["metrics", "--category", "Revenue Growth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data available"));
}

#[test]
fn analyze_dry_run_prints_prompts_without_calling_the_service() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    ctx.cli()
        .args(["analyze", "--category", "Revenue Growth", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis: Revenue Growth"))
        .stdout(predicate::str::contains("senior marketing performance auditor"))
        .stdout(predicate::str::contains("TARGET:\nRevenue Growth"))
        .stdout(predicate::str::contains("Goal: Revenue Growth"))
        .stdout(predicate::str::contains("Cost per customer: $20.0"));
}

#[test]
fn analyze_dry_run_needs_no_api_key() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    let mut cmd = ctx.cli();
    cmd.env_remove("OPENAI_API_KEY");
    cmd.args(["analyze", "--category", "Customer Acquisition", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- System prompt ---"));
}

#[test]
fn analyze_without_api_key_reports_configuration_error() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    let mut cmd = ctx.cli();
    cmd.env_remove("OPENAI_API_KEY");
    cmd.args(["analyze", "--category", "Customer Acquisition"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn analyze_renders_the_four_metric_cards() {
    let ctx = TestContext::new();
    ctx.write_dataset(SCENARIO_CSV);

    ctx.cli()
        .args(["analyze", "--category", "Revenue Growth", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key Metrics"))
        .stdout(predicate::str::contains("Campaign Name:       Spring Sale"))
        .stdout(predicate::str::contains("Total New Customers: 50"))
        .stdout(predicate::str::contains("Total Revenue:       $3,000"))
        .stdout(predicate::str::contains("Total Spend:         $1,000"));
}

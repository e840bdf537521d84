//! End-to-end tests that parse real argument lists and run the commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use salary_cli::{app, cli::Cli};

/// Fresh, empty directory unique to one test.
fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "salary-cli-{}-{}",
        std::process::id(),
        test_name
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("salarywise").chain(args.iter().copied()))?;
    app::run(&cli.command)
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn breakup_prints_scenario_figures() {
    let output = run(&["breakup", "--gross", "1,200,000"]).unwrap();

    assert!(output.contains("399312.00"));
    assert!(output.contains("1039312.00"));
    assert!(output.contains("86609.33"));
}

#[test]
fn breakup_without_gross_fails() {
    assert!(run(&["breakup"]).is_err());
}

#[test]
fn breakup_rejects_out_of_range_percentage() {
    let result = run(&["breakup", "--gross", "1000000", "--basic", "120"]);

    assert!(result.is_err());
}

#[test]
fn breakup_itemizes_retirement_with_tax_line() {
    let output = run(&[
        "breakup",
        "--gross",
        "1200000",
        "--vpf",
        "10",
        "--nps",
        "5",
        "--itemize-retirement",
        "--tax-line",
    ])
    .unwrap();

    assert!(output.contains("Voluntary PF (VPF)"));
    assert!(output.contains("NPS"));
    assert!(output.contains("Tax Deducted"));
}

#[test]
fn tax_command_prints_rounded_estimate() {
    let output = run(&["tax", "--gross", "1000000"]).unwrap();

    assert!(output.contains("50000.00"));
}

#[test]
fn tax_command_rejects_negative_gross() {
    let err = run(&["tax", "--gross", "-1"]).unwrap_err();

    assert!(err.to_string().contains("must be non-negative"));
}

#[test]
fn tax_command_accepts_negative_zero() {
    let output = run(&["tax", "--gross", "-0"]).unwrap();

    assert!(output.contains("0.00"));
}

#[test]
fn tax_command_rejects_gross_above_cap() {
    assert!(run(&["tax", "--gross", "70000000000000000000000000000"]).is_err());
}

#[test]
fn breakup_rejects_gross_above_cap() {
    let err = run(&["breakup", "--gross", "70000000000000000000000000000"]).unwrap_err();

    assert!(format!("{err:#}").contains("must not exceed"));
}

#[test]
fn breakup_rejects_empty_gross() {
    assert!(run(&["breakup", "--gross", ""]).is_err());
    assert!(run(&["breakup", "--gross", "1200000", "--basic", " "]).is_err());
}

#[test]
fn save_then_load_and_breakup_from_config() {
    let dir = scratch_dir("save_load");
    let config = path_arg(&dir.join("saved_config.csv"));

    let saved = run(&["save", "--config", &config, "--gross", "1200000", "--nps", "5"]).unwrap();
    assert!(saved.contains("Configuration saved"));

    let loaded = run(&["load", "--config", &config]).unwrap();
    assert!(loaded.contains("1200000"));
    assert!(loaded.contains("4.81"));

    let breakup = run(&["breakup", "--from-config", &config, "--itemize-retirement"]).unwrap();
    assert!(breakup.contains("NPS"));
    assert!(breakup.contains("24000.00"));
}

#[test]
fn load_missing_configuration_is_not_an_error() {
    let dir = scratch_dir("missing");
    let config = path_arg(&dir.join("nothing_here.csv"));

    let output = run(&["load", "--config", &config]).unwrap();

    assert!(output.contains("No configuration file found"));
}

#[test]
fn breakup_exports_csv_report() {
    let dir = scratch_dir("export");
    let report = dir.join("salary_breakup_report.csv");

    run(&["breakup", "--gross", "1200000", "--export", &path_arg(&report)]).unwrap();

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.starts_with("Component,Amount\n"));
    assert!(text.contains("Tax Deducted,80000.00\n"));
}

#[test]
fn breakup_with_custom_brackets() {
    let dir = scratch_dir("brackets");
    let brackets = dir.join("flat.csv");
    fs::write(&brackets, "lower_bound,upper_bound,base_tax,rate\n0,,0,0.10\n").unwrap();

    let output = run(&["tax", "--gross", "500000", "--brackets", &path_arg(&brackets)]).unwrap();

    assert!(output.contains("50000.00"));
}

//! Command dispatch. Each command returns the text to print so callers (and
//! tests) decide where it goes.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use salary_core::calculations::common::round_half_up;
use salary_core::{
    CompensationInput, ConfigStore, MAX_GROSS, SalaryCalculator, SavedConfiguration, StoreError,
    TaxSchedule,
};
use salary_data::{BracketTableLoader, CsvConfigStore, export_report};
use tracing::{debug, info, warn};

use crate::cli::{BreakupArgs, Command, LoadArgs, SaveArgs, TaxArgs};
use crate::render;

pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Breakup(args) => breakup(args),
        Command::Tax(args) => tax(args),
        Command::Save(args) => save(args),
        Command::Load(args) => load(args),
    }
}

/// The bracket table at `path`, or the built-in schedule.
fn load_schedule(path: Option<&Path>) -> Result<TaxSchedule> {
    match path {
        Some(path) => BracketTableLoader::load_file(path)
            .with_context(|| format!("Failed to load tax brackets: {}", path.display())),
        None => Ok(TaxSchedule::new_regime()),
    }
}

/// Reads the saved configuration, mapping "nothing saved" to `None`.
fn read_saved(store: &dyn ConfigStore) -> Result<Option<SavedConfiguration>> {
    match store.load() {
        Ok(config) => Ok(Some(config)),
        Err(StoreError::NotFound) => Ok(None),
        Err(e) => Err(anyhow!(e)),
    }
}

fn warn_outside_suggested_ranges(input: &CompensationInput) {
    for (range, value) in input.outside_suggested_ranges() {
        warn!(
            field = range.field,
            %value,
            "outside the suggested range {}–{}",
            range.min,
            range.max
        );
    }
}

fn breakup(args: &BreakupArgs) -> Result<String> {
    let base = match &args.from_config {
        Some(path) => {
            let store = CsvConfigStore::new(path);
            let saved = read_saved(&store)
                .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
            if saved.is_none() {
                warn!(path = %path.display(), "no configuration file found; using flags only");
            }
            saved
        }
        None => None,
    };

    let input = args
        .compensation
        .to_input(base)
        .ok_or_else(|| anyhow!("--gross is required when no saved configuration is loaded"))?;
    warn_outside_suggested_ranges(&input);

    let calculator = SalaryCalculator::new(load_schedule(args.brackets.as_deref())?, args.options());
    let report = calculator.calculate(&input).context("Invalid compensation input")?;
    debug!(lines = report.breakup.len(), "rendering report");

    if let Some(path) = &args.export {
        export_report(path, &report)?;
    }

    Ok(render::render_report(&report))
}

fn tax(args: &TaxArgs) -> Result<String> {
    if args.gross < Decimal::ZERO {
        anyhow::bail!("gross income must be non-negative, got {}", args.gross);
    }
    if args.gross > MAX_GROSS {
        anyhow::bail!("gross income must not exceed {MAX_GROSS}, got {}", args.gross);
    }

    let schedule = load_schedule(args.brackets.as_deref())?;
    let tax = schedule.tax_for(args.gross);

    Ok(render::render_tax(args.gross, round_half_up(tax)))
}

fn save(args: &SaveArgs) -> Result<String> {
    let input = args
        .compensation
        .to_input(None)
        .ok_or_else(|| anyhow!("--gross is required to save a configuration"))?;
    input.validate().context("Invalid compensation input")?;
    warn_outside_suggested_ranges(&input);

    let store = CsvConfigStore::new(&args.config);
    store
        .save(&SavedConfiguration::from(&input))
        .with_context(|| format!("Failed to save configuration: {}", args.config.display()))?;

    info!(path = %args.config.display(), "configuration saved");
    Ok(format!("Configuration saved to {}", args.config.display()))
}

fn load(args: &LoadArgs) -> Result<String> {
    let store = CsvConfigStore::new(&args.config);
    match read_saved(&store)
        .with_context(|| format!("Failed to load configuration: {}", args.config.display()))?
    {
        Some(config) => Ok(render::render_config(&config)),
        None => {
            warn!(path = %args.config.display(), "no configuration file found");
            Ok(format!("No configuration file found at {}", args.config.display()))
        }
    }
}

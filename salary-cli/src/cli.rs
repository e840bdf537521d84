use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use salary_core::{BreakupOptions, CompensationInput, RetirementPolicy, SavedConfiguration};

use crate::utils::parse_decimal;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// In-hand salary calculator.
///
/// Splits an annual CTC into its salary components, estimates income tax
/// under a progressive bracket schedule and derives annual and monthly
/// take-home pay.
#[derive(Debug, Parser)]
#[command(name = "salarywise", version)]
pub struct Cli {
    /// Log filter: a bare level (`debug`) or any `RUST_LOG`-style directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the salary breakup, tax estimate and in-hand salary.
    Breakup(BreakupArgs),
    /// Print the estimated tax on a gross amount.
    Tax(TaxArgs),
    /// Save compensation inputs as the configuration file.
    Save(SaveArgs),
    /// Print the saved configuration.
    Load(LoadArgs),
}

/// Compensation inputs. Percentages are in percent; every allocation except
/// basic is a share of basic pay. Amounts accept comma separators.
#[derive(Debug, Clone, Default, Args)]
pub struct CompensationArgs {
    /// Annual gross compensation (CTC).
    #[arg(long, value_parser = parse_decimal)]
    pub gross: Option<Decimal>,

    /// Basic salary, % of CTC [default: 40, suggested 20–50].
    #[arg(long, value_parser = parse_decimal)]
    pub basic: Option<Decimal>,

    /// HRA, % of basic [default: 50, suggested 30–60].
    #[arg(long, value_parser = parse_decimal)]
    pub hra: Option<Decimal>,

    /// Provident fund, % of basic [default: 12, suggested 10–20].
    #[arg(long, value_parser = parse_decimal)]
    pub pf: Option<Decimal>,

    /// Gratuity, % of basic [default: 4.81, suggested 4–5].
    #[arg(long, value_parser = parse_decimal)]
    pub gratuity: Option<Decimal>,

    /// Voluntary provident fund, % of basic [suggested 0–100].
    #[arg(long, value_parser = parse_decimal)]
    pub vpf: Option<Decimal>,

    /// NPS contribution, % of basic [suggested 0–10].
    #[arg(long, value_parser = parse_decimal)]
    pub nps: Option<Decimal>,

    /// Appraisal raise applied to CTC, in percent.
    #[arg(long, value_parser = parse_decimal)]
    pub appraisal: Option<Decimal>,
}

impl CompensationArgs {
    /// Builds an input from `base` (a saved configuration, if any) with every
    /// flag that was given taking precedence.
    ///
    /// Returns `None` when neither the flags nor `base` supply a gross.
    pub fn to_input(
        &self,
        base: Option<SavedConfiguration>,
    ) -> Option<CompensationInput> {
        let mut input = match (base, self.gross) {
            (Some(config), _) => CompensationInput::from(config),
            (None, Some(gross)) => CompensationInput::with_defaults(gross),
            (None, None) => return None,
        };

        if let Some(gross) = self.gross {
            input.gross = gross;
        }
        if let Some(pct) = self.basic {
            input.basic_pct = pct;
        }
        if let Some(pct) = self.hra {
            input.hra_pct = pct;
        }
        if let Some(pct) = self.pf {
            input.pf_pct = pct;
        }
        if let Some(pct) = self.gratuity {
            input.gratuity_pct = pct;
        }
        input.voluntary_pf_pct = self.vpf.or(input.voluntary_pf_pct);
        input.nps_pct = self.nps.or(input.nps_pct);
        input.appraisal_pct = self.appraisal.or(input.appraisal_pct);

        Some(input)
    }
}

#[derive(Debug, Args)]
pub struct BreakupArgs {
    #[command(flatten)]
    pub compensation: CompensationArgs,

    /// Start from a saved configuration; explicit flags override its values.
    #[arg(long)]
    pub from_config: Option<PathBuf>,

    /// Include a "Tax Deducted" line in the breakup.
    #[arg(long)]
    pub tax_line: bool,

    /// Show VPF and NPS as separate lines instead of folding them into PF.
    #[arg(long)]
    pub itemize_retirement: bool,

    /// CSV bracket table to use instead of the built-in schedule.
    #[arg(long)]
    pub brackets: Option<PathBuf>,

    /// Write the report as CSV to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl BreakupArgs {
    pub fn options(&self) -> BreakupOptions {
        BreakupOptions {
            include_tax_line: self.tax_line,
            retirement: if self.itemize_retirement {
                RetirementPolicy::Itemized
            } else {
                RetirementPolicy::Merged
            },
        }
    }
}

#[derive(Debug, Args)]
pub struct TaxArgs {
    /// Annual gross income.
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub gross: Decimal,

    /// CSV bracket table to use instead of the built-in schedule.
    #[arg(long)]
    pub brackets: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub compensation: CompensationArgs,

    /// Configuration file to write.
    #[arg(long, default_value = "saved_config.csv")]
    pub config: PathBuf,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Configuration file to read.
    #[arg(long, default_value = "saved_config.csv")]
    pub config: PathBuf,
}

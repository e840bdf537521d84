//! Plain-text rendering of reports and saved configurations.

use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use salary_core::{SalaryReport, SavedConfiguration};

use crate::utils::opt_decimal_display;

const LABEL_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 16;
/// Bar length for a 100% share.
const BAR_WIDTH: u32 = 40;

fn amount_row(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}", format!("{amount:.2}"));
}

fn heading(
    out: &mut String,
    title: &str,
) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "─".repeat(LABEL_WIDTH + AMOUNT_WIDTH));
}

/// Bar proportional to `share` (a percentage); negative shares get no bar.
fn bar(share: Decimal) -> String {
    let cells = (share.max(Decimal::ZERO) * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0);
    "█".repeat(cells)
}

/// Breakup table, component distribution and the tax and net figures.
pub fn render_report(report: &SalaryReport) -> String {
    let mut out = String::new();

    heading(&mut out, "Salary Breakup");
    for line in &report.breakup {
        amount_row(&mut out, line.component.label(), line.amount);
    }

    let shares = report.breakup.shares();
    if !shares.is_empty() {
        out.push('\n');
        heading(&mut out, "Salary Components Distribution");
        for (component, share) in shares {
            let _ = writeln!(
                out,
                "{:<LABEL_WIDTH$}{:>6}%  {}",
                component.label(),
                format!("{share:.1}"),
                bar(share)
            );
        }
    }

    out.push('\n');
    heading(&mut out, "Estimated In-Hand Salary");
    amount_row(&mut out, "Gross (CTC)", report.effective_gross);
    amount_row(&mut out, "Estimated Tax", report.tax_display());
    amount_row(&mut out, SalaryReport::ANNUAL_LABEL, report.net.annual);
    amount_row(&mut out, SalaryReport::MONTHLY_LABEL, report.net.monthly);

    out
}

pub fn render_tax(
    gross: Decimal,
    tax: Decimal,
) -> String {
    let mut out = String::new();
    amount_row(&mut out, "Gross", gross);
    amount_row(&mut out, "Estimated Tax", tax);
    out
}

pub fn render_config(config: &SavedConfiguration) -> String {
    let mut out = String::new();
    heading(&mut out, "Saved Configuration");
    let rows = [
        ("CTC", Some(config.gross)),
        ("Basic Salary (%)", Some(config.basic_pct)),
        ("HRA (%)", Some(config.hra_pct)),
        ("Provident Fund (PF) (%)", Some(config.pf_pct)),
        ("Gratuity (%)", Some(config.gratuity_pct)),
        ("Voluntary PF (%)", config.voluntary_pf_pct),
        ("NPS (%)", config.nps_pct),
        ("Appraisal (%)", config.appraisal_pct),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}", opt_decimal_display(&value));
    }
    out
}

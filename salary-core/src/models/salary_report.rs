use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{Component, SalaryBreakup};

/// Take-home pay after tax, retirement contributions and gratuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetIncome {
    pub annual: Decimal,
    pub monthly: Decimal,
}

/// Everything computed for one compensation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Gross after any appraisal raise; the base of every other figure.
    pub effective_gross: Decimal,
    pub breakup: SalaryBreakup,
    /// Unrounded estimate; round at the point of display.
    pub tax: Decimal,
    pub net: NetIncome,
}

/// A `(component, amount)` pair as written to flat-file exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub amount: Decimal,
}

impl SalaryReport {
    pub const ANNUAL_LABEL: &'static str = "In-Hand Annual Salary";
    pub const MONTHLY_LABEL: &'static str = "In-Hand Monthly Salary";

    /// Tax rounded to two decimal places.
    pub fn tax_display(&self) -> Decimal {
        round_half_up(self.tax)
    }

    /// Rows for export: the breakup lines, then tax (unless the breakup
    /// already carries it), then the annual and monthly net figures.
    pub fn report_rows(&self) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .breakup
            .iter()
            .map(|line| ReportRow {
                label: line.component.label(),
                amount: line.amount,
            })
            .collect();

        if !self.breakup.contains(Component::TaxDeducted) {
            rows.push(ReportRow {
                label: Component::TaxDeducted.label(),
                amount: self.tax_display(),
            });
        }

        rows.push(ReportRow {
            label: Self::ANNUAL_LABEL,
            amount: self.net.annual,
        });
        rows.push(ReportRow {
            label: Self::MONTHLY_LABEL,
            amount: self.net.monthly,
        });

        rows
    }
}

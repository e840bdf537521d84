use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Component;

/// How optional retirement contributions appear in the breakup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetirementPolicy {
    /// PF, VPF and NPS are summed into a single `RetirementFund` line.
    #[default]
    Merged,
    /// VPF and NPS get their own lines when a percentage was supplied.
    Itemized,
}

/// Presentation switches for [`compute_breakup`](crate::compute_breakup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakupOptions {
    /// Append a `TaxDeducted` line holding the estimate on gross.
    pub include_tax_line: bool,
    pub retirement: RetirementPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakupLine {
    pub component: Component,
    pub amount: Decimal,
}

/// Ordered component amounts, each rounded to two decimal places.
///
/// `SpecialAllowance` is a residual and may be negative when the other
/// allocations exceed gross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakup {
    lines: Vec<BreakupLine>,
}

impl SalaryBreakup {
    pub(crate) fn new(lines: Vec<BreakupLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[BreakupLine] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakupLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(
        &self,
        component: Component,
    ) -> bool {
        self.amount(component).is_some()
    }

    pub fn amount(
        &self,
        component: Component,
    ) -> Option<Decimal> {
        self.lines
            .iter()
            .find(|line| line.component == component)
            .map(|line| line.amount)
    }

    /// Sum of every retirement line, whether merged or itemized.
    pub fn retirement_total(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|line| line.component.is_retirement())
            .map(|line| line.amount)
            .sum()
    }

    /// Sum of the lines that make up gross pay (everything but tax).
    pub fn allocated_total(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|line| line.component != Component::TaxDeducted)
            .map(|line| line.amount)
            .sum()
    }

    /// Each line's share of the allocated total, in percent.
    ///
    /// Used for the distribution view. Returns an empty list when the total
    /// is zero, since there is nothing to apportion.
    pub fn shares(&self) -> Vec<(Component, Decimal)> {
        let total = self.allocated_total();
        if total.is_zero() {
            return Vec::new();
        }

        self.lines
            .iter()
            .filter(|line| line.component != Component::TaxDeducted)
            .map(|line| (line.component, line.amount * Decimal::ONE_HUNDRED / total))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SalaryBreakup {
    type Item = &'a BreakupLine;
    type IntoIter = std::slice::Iter<'a, BreakupLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

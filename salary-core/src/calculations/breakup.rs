//! Component breakup of a gross compensation figure.
//!
//! Components are computed in a fixed order because each later term depends
//! on basic pay:
//!
//! | Step | Component | Formula |
//! |------|-----------|---------|
//! | 1 | Basic | gross × basic% |
//! | 2 | HRA | basic × hra% |
//! | 3 | Retirement (PF, VPF, NPS) | basic × pct, per fund |
//! | 4 | Gratuity | basic × gratuity% |
//! | 5 | Special allowance | gross − (1 + 2 + 3 + 4) |
//!
//! Each line is rounded to two decimal places on its own, so the rounded
//! lines may differ from gross by a few hundredths.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{percent_of, round_half_up};
use crate::calculations::TaxSchedule;
use crate::models::{
    BreakupLine, BreakupOptions, CompensationInput, Component, RetirementPolicy, SalaryBreakup,
};

/// Unrounded component amounts, kept so the residual is taken before rounding.
#[derive(Debug, Clone, Copy)]
struct RawComponents {
    basic: Decimal,
    housing: Decimal,
    provident_fund: Decimal,
    voluntary_fund: Option<Decimal>,
    pension: Option<Decimal>,
    gratuity: Decimal,
}

impl RawComponents {
    fn compute(
        gross: Decimal,
        input: &CompensationInput,
    ) -> Self {
        let basic = percent_of(gross, input.basic_pct);
        Self {
            basic,
            housing: percent_of(basic, input.hra_pct),
            provident_fund: percent_of(basic, input.pf_pct),
            voluntary_fund: input.voluntary_pf_pct.map(|pct| percent_of(basic, pct)),
            pension: input.nps_pct.map(|pct| percent_of(basic, pct)),
            gratuity: percent_of(basic, input.gratuity_pct),
        }
    }

    fn retirement_total(&self) -> Decimal {
        self.provident_fund
            + self.voluntary_fund.unwrap_or_default()
            + self.pension.unwrap_or_default()
    }

    fn special_allowance(
        &self,
        gross: Decimal,
    ) -> Decimal {
        gross - (self.basic + self.housing + self.retirement_total() + self.gratuity)
    }
}

/// Splits the effective gross of `input` into its salary components.
///
/// The input is assumed to be validated. A `TaxDeducted` line, when
/// requested, uses the built-in schedule.
pub fn compute_breakup(
    input: &CompensationInput,
    options: BreakupOptions,
) -> SalaryBreakup {
    compute_breakup_with(input, options, TaxSchedule::canonical())
}

/// Same as [`compute_breakup`], taking the tax line from `schedule`.
pub fn compute_breakup_with(
    input: &CompensationInput,
    options: BreakupOptions,
    schedule: &TaxSchedule,
) -> SalaryBreakup {
    let gross = input.effective_gross();
    let raw = RawComponents::compute(gross, input);
    let line = |component: Component, amount: Decimal| BreakupLine {
        component,
        amount: round_half_up(amount),
    };

    let mut lines = vec![
        line(Component::Basic, raw.basic),
        line(Component::HousingAllowance, raw.housing),
        line(Component::SpecialAllowance, raw.special_allowance(gross)),
    ];

    match options.retirement {
        RetirementPolicy::Merged => {
            lines.push(line(Component::RetirementFund, raw.retirement_total()));
        }
        RetirementPolicy::Itemized => {
            lines.push(line(Component::RetirementFund, raw.provident_fund));
            if let Some(voluntary) = raw.voluntary_fund {
                lines.push(line(Component::VoluntaryRetirementFund, voluntary));
            }
            if let Some(pension) = raw.pension {
                lines.push(line(Component::PensionScheme, pension));
            }
        }
    }

    lines.push(line(Component::Gratuity, raw.gratuity));

    if options.include_tax_line {
        lines.push(line(Component::TaxDeducted, schedule.tax_for(gross)));
    }

    debug!(%gross, lines = lines.len(), ?options, "computed salary breakup");
    SalaryBreakup::new(lines)
}

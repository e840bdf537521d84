//! Take-home pay derived from a breakup and a tax estimate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_half_up;
use crate::models::{Component, NetIncome, SalaryBreakup};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Applies an appraisal raise of `raise_pct` percent.
///
/// A raise of zero or less leaves `gross` untouched rather than multiplying
/// by one.
pub fn effective_gross(
    gross: Decimal,
    raise_pct: Decimal,
) -> Decimal {
    if raise_pct > Decimal::ZERO {
        gross * (Decimal::ONE + raise_pct / Decimal::ONE_HUNDRED)
    } else {
        gross
    }
}

/// Net income after tax and the non-disbursed deductions.
///
/// `gross − tax − retirement − gratuity`, where retirement and gratuity are
/// the rounded breakup lines and `tax` is the unrounded estimate. The annual
/// and monthly figures are each rounded from the unrounded annual value.
pub fn derive_net_income(
    gross: Decimal,
    tax: Decimal,
    breakup: &SalaryBreakup,
) -> NetIncome {
    let gratuity = breakup.amount(Component::Gratuity).unwrap_or_default();
    let annual = gross - tax - breakup.retirement_total() - gratuity;

    NetIncome {
        annual: round_half_up(annual),
        monthly: round_half_up(annual / MONTHS_PER_YEAR),
    }
}

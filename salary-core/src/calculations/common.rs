//! Rounding and small arithmetic helpers shared by the salary calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, the usual convention
/// for currency display.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(86609.3333)), dec!(86609.33));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage expressed in percent (`12.5` is 12.5%) to `base`.
pub fn percent_of(
    base: Decimal,
    pct: Decimal,
) -> Decimal {
    base * pct / Decimal::ONE_HUNDRED
}

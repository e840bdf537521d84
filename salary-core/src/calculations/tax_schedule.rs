//! Progressive income-tax schedule and its evaluator.
//!
//! A schedule is an ordered table of brackets. Evaluation walks the table in
//! ascending order and stops at the first bracket whose (inclusive) upper
//! bound is at or above the income:
//!
//! ```text
//! tax = base_tax + rate × (income − lower_bound)
//! ```
//!
//! The canonical table, [`TaxSchedule::new_regime`]:
//!
//! | Upper bound | Base tax | Rate |
//! |-------------|----------|------|
//! | 300,000     | 0        | 0%   |
//! | 700,000     | 0        | 5%   |
//! | 1,000,000   | 20,000   | 10%  |
//! | 1,200,000   | 50,000   | 15%  |
//! | 1,500,000   | 80,000   | 20%  |
//! | —           | 140,000  | 30%  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::estimate_tax;
//!
//! assert_eq!(estimate_tax(dec!(1000000)), dec!(50000));
//! assert_eq!(estimate_tax(dec!(300000.01)), dec!(0.0005));
//! ```

use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::TaxBracket;

/// Errors raised when a bracket table has the wrong shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("no tax brackets provided")]
    NoBrackets,

    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    #[error("bracket {index} starts at {lower}, expected {expected}")]
    Gap {
        index: usize,
        lower: Decimal,
        expected: Decimal,
    },

    #[error("bracket {index} has upper bound {upper} not above its lower bound {lower}")]
    EmptyRange {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("bracket {index} has a negative rate or base tax")]
    Negative { index: usize },

    #[error("only the last bracket may be unbounded (bracket {0} is not last)")]
    UnboundedNotLast(usize),

    #[error("last bracket must be unbounded")]
    BoundedTop,
}

/// Validated, ordered bracket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Builds a schedule after checking that the brackets are contiguous,
    /// start at zero and end with an open-ended bracket.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let first = brackets.first().ok_or(ScheduleError::NoBrackets)?;
        if !first.lower_bound.is_zero() {
            return Err(ScheduleError::NonZeroStart(first.lower_bound));
        }

        let last_index = brackets.len() - 1;
        let mut expected_lower = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.lower_bound != expected_lower {
                return Err(ScheduleError::Gap {
                    index,
                    lower: bracket.lower_bound,
                    expected: expected_lower,
                });
            }
            if bracket.rate.is_sign_negative() || bracket.base_tax.is_sign_negative() {
                return Err(ScheduleError::Negative { index });
            }

            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ScheduleError::EmptyRange {
                        index,
                        lower: bracket.lower_bound,
                        upper,
                    });
                }
                Some(_) if index == last_index => return Err(ScheduleError::BoundedTop),
                Some(upper) => expected_lower = upper,
                None if index != last_index => return Err(ScheduleError::UnboundedNotLast(index)),
                None => {}
            }
        }

        let schedule = Self { brackets };
        if !schedule.is_continuous() {
            tracing::warn!("tax schedule base amounts are not continuous across brackets");
        }
        Ok(schedule)
    }

    /// The built-in progressive schedule.
    pub fn new_regime() -> Self {
        let bracket = |lower: Decimal, upper: Option<Decimal>, base_tax: Decimal, rate: Decimal| {
            TaxBracket {
                lower_bound: lower,
                upper_bound: upper,
                base_tax,
                rate,
            }
        };

        Self {
            brackets: vec![
                bracket(dec!(0), Some(dec!(300000)), dec!(0), dec!(0)),
                bracket(dec!(300000), Some(dec!(700000)), dec!(0), dec!(0.05)),
                bracket(dec!(700000), Some(dec!(1000000)), dec!(20000), dec!(0.10)),
                bracket(dec!(1000000), Some(dec!(1200000)), dec!(50000), dec!(0.15)),
                bracket(dec!(1200000), Some(dec!(1500000)), dec!(80000), dec!(0.20)),
                bracket(dec!(1500000), None, dec!(140000), dec!(0.30)),
            ],
        }
    }

    /// Shared instance of [`TaxSchedule::new_regime`].
    pub fn canonical() -> &'static TaxSchedule {
        static SCHEDULE: OnceLock<TaxSchedule> = OnceLock::new();
        SCHEDULE.get_or_init(Self::new_regime)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the bracket `income` falls into.
    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> &TaxBracket {
        // `new` guarantees a non-empty table ending in an unbounded bracket,
        // so the fallback to the last bracket is never a different answer.
        self.brackets
            .iter()
            .find(|b| b.covers(income))
            .unwrap_or(&self.brackets[self.brackets.len() - 1])
    }

    /// Tax liability on `income`. Not rounded; zero for income ≤ 0.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.bracket_for(income).tax_on(income)
    }

    /// Whether each bracket's base equals the previous bracket's tax at its
    /// upper bound, so the schedule has no jumps.
    pub fn is_continuous(&self) -> bool {
        self.brackets.windows(2).all(|pair| match pair[0].upper_bound {
            Some(upper) => pair[0].tax_on(upper) == pair[1].base_tax,
            None => false,
        })
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::new_regime()
    }
}

/// Estimated tax on `gross` under the built-in schedule.
pub fn estimate_tax(gross: Decimal) -> Decimal {
    TaxSchedule::canonical().tax_for(gross)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bracket(
        lower: Decimal,
        upper: Option<Decimal>,
        base_tax: Decimal,
        rate: Decimal,
    ) -> TaxBracket {
        TaxBracket {
            lower_bound: lower,
            upper_bound: upper,
            base_tax,
            rate,
        }
    }

    // =========================================================================
    // estimate_tax tests
    // =========================================================================

    #[test]
    fn zero_income_owes_nothing() {
        assert_eq!(estimate_tax(dec!(0)), dec!(0));
    }

    #[test]
    fn negative_income_is_treated_as_zero() {
        assert_eq!(estimate_tax(dec!(-5000)), dec!(0));
    }

    #[test]
    fn first_boundary_is_inclusive() {
        assert_eq!(estimate_tax(dec!(300000)), dec!(0));
    }

    #[test]
    fn one_paisa_over_first_boundary() {
        assert_eq!(estimate_tax(dec!(300000.01)), dec!(0.0005));
    }

    #[test]
    fn second_bracket() {
        // 5% of 200,000
        assert_eq!(estimate_tax(dec!(500000)), dec!(10000));
    }

    #[test]
    fn million_lands_on_third_bracket_boundary() {
        // 20,000 + 10% × 300,000
        assert_eq!(estimate_tax(dec!(1000000)), dec!(50000));
    }

    #[test]
    fn fourth_bracket_upper_boundary() {
        // 50,000 + 15% × 200,000
        assert_eq!(estimate_tax(dec!(1200000)), dec!(80000));
    }

    #[test]
    fn fifth_bracket() {
        // 80,000 + 20% × 100,000
        assert_eq!(estimate_tax(dec!(1300000)), dec!(100000));
    }

    #[test]
    fn top_bracket() {
        // 140,000 + 30% × 500,000
        assert_eq!(estimate_tax(dec!(2000000)), dec!(290000));
    }

    #[test]
    fn tax_is_non_decreasing() {
        let mut previous = Decimal::ZERO;
        let mut income = Decimal::ZERO;
        while income <= dec!(2500000) {
            let tax = estimate_tax(income);
            assert!(tax >= previous, "tax fell at income {income}");
            previous = tax;
            income += dec!(12345.67);
        }
    }

    #[test]
    fn tax_is_non_decreasing_across_each_boundary() {
        for b in TaxSchedule::new_regime().brackets() {
            if let Some(upper) = b.upper_bound {
                assert!(estimate_tax(upper + dec!(0.01)) >= estimate_tax(upper));
            }
        }
    }

    // =========================================================================
    // schedule validation tests
    // =========================================================================

    #[test]
    fn canonical_schedule_is_valid_and_continuous() {
        let canonical = TaxSchedule::new_regime();

        let rebuilt = TaxSchedule::new(canonical.brackets().to_vec());

        assert_eq!(rebuilt, Ok(canonical.clone()));
        assert!(canonical.is_continuous());
    }

    #[test]
    fn empty_schedule_is_rejected() {
        assert_eq!(TaxSchedule::new(vec![]), Err(ScheduleError::NoBrackets));
    }

    #[test]
    fn schedule_must_start_at_zero() {
        let result = TaxSchedule::new(vec![bracket(dec!(100), None, dec!(0), dec!(0.1))]);

        assert_eq!(result, Err(ScheduleError::NonZeroStart(dec!(100))));
    }

    #[test]
    fn gaps_between_brackets_are_rejected() {
        let result = TaxSchedule::new(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0), dec!(0)),
            bracket(dec!(1500), None, dec!(0), dec!(0.1)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::Gap {
                index: 1,
                lower: dec!(1500),
                expected: dec!(1000),
            })
        );
    }

    #[test]
    fn empty_range_is_rejected() {
        let result = TaxSchedule::new(vec![
            bracket(dec!(0), Some(dec!(0)), dec!(0), dec!(0)),
            bracket(dec!(0), None, dec!(0), dec!(0.1)),
        ]);

        assert!(matches!(result, Err(ScheduleError::EmptyRange { index: 0, .. })));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let result = TaxSchedule::new(vec![bracket(dec!(0), None, dec!(0), dec!(-0.1))]);

        assert_eq!(result, Err(ScheduleError::Negative { index: 0 }));
    }

    #[test]
    fn top_bracket_must_be_unbounded() {
        let result = TaxSchedule::new(vec![bracket(dec!(0), Some(dec!(1000)), dec!(0), dec!(0.1))]);

        assert_eq!(result, Err(ScheduleError::BoundedTop));
    }

    #[test]
    fn unbounded_bracket_must_be_last() {
        let result = TaxSchedule::new(vec![
            bracket(dec!(0), None, dec!(0), dec!(0)),
            bracket(dec!(1000), None, dec!(0), dec!(0.1)),
        ]);

        assert_eq!(result, Err(ScheduleError::UnboundedNotLast(0)));
    }

    #[test]
    fn discontinuous_schedule_is_accepted_but_flagged() {
        let schedule = TaxSchedule::new(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0), dec!(0.1)),
            bracket(dec!(1000), None, dec!(500), dec!(0.2)),
        ])
        .unwrap();

        assert!(!schedule.is_continuous());
        assert_eq!(schedule.tax_for(dec!(2000)), dec!(700));
    }
}

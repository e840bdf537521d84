//! Boundary checks run before an input reaches the engine.
//!
//! Out-of-range values are rejected, not clamped. Percentages must lie in
//! `[0, 100]`; the appraisal raise only needs to be non-negative. The
//! narrower slider ranges in [`SUGGESTED_RANGES`](crate::SUGGESTED_RANGES)
//! are advisory and not checked here.
//!
//! Gross and the appraisal raise are also capped so the arithmetic that
//! follows stays well inside the range of [`Decimal`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{CompensationInput, SUGGESTED_RANGES, SuggestedRange};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("gross compensation must be non-negative, got {0}")]
    NegativeGross(Decimal),

    #[error("{field} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { field: &'static str, value: Decimal },

    #[error("appraisal raise must be non-negative, got {0}")]
    NegativeAppraisal(Decimal),

    #[error("gross compensation must not exceed 1000000000000000, got {0}")]
    GrossTooLarge(Decimal),

    #[error("appraisal raise must not exceed 1000%, got {0}")]
    AppraisalTooLarge(Decimal),
}

/// Largest accepted gross compensation (one quadrillion).
pub const MAX_GROSS: Decimal = dec!(1000000000000000);

/// Largest accepted appraisal raise, in percent.
pub const MAX_APPRAISAL_PCT: Decimal = dec!(1000);

fn check_percentage(
    field: &'static str,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::PercentageOutOfRange { field, value });
    }
    Ok(())
}

impl CompensationInput {
    /// Every percentage field with its name, optional ones only when set.
    fn percentages(&self) -> impl Iterator<Item = (&'static str, Decimal)> {
        [
            ("basic_pct", Some(self.basic_pct)),
            ("hra_pct", Some(self.hra_pct)),
            ("pf_pct", Some(self.pf_pct)),
            ("gratuity_pct", Some(self.gratuity_pct)),
            ("voluntary_pf_pct", self.voluntary_pf_pct),
            ("nps_pct", self.nps_pct),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }

    /// Rejects gross outside `[0, MAX_GROSS]`, percentages outside `[0, 100]`
    /// and an appraisal raise outside `[0, MAX_APPRAISAL_PCT]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gross < Decimal::ZERO {
            return Err(ValidationError::NegativeGross(self.gross));
        }
        if self.gross > MAX_GROSS {
            return Err(ValidationError::GrossTooLarge(self.gross));
        }

        for (field, value) in self.percentages() {
            check_percentage(field, value)?;
        }

        match self.appraisal_pct {
            Some(raise) if raise < Decimal::ZERO => Err(ValidationError::NegativeAppraisal(raise)),
            Some(raise) if raise > MAX_APPRAISAL_PCT => {
                Err(ValidationError::AppraisalTooLarge(raise))
            }
            _ => Ok(()),
        }
    }

    /// Fields whose value sits outside the suggested slider range.
    pub fn outside_suggested_ranges(&self) -> Vec<(SuggestedRange, Decimal)> {
        self.percentages()
            .filter_map(|(field, value)| {
                SUGGESTED_RANGES
                    .iter()
                    .find(|range| range.field == field)
                    .filter(|range| !range.contains(value))
                    .map(|range| (*range, value))
            })
            .collect()
    }
}

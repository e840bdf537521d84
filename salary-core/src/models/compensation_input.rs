use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::effective_gross;

/// Annual gross compensation and the percentage allocations applied to it.
///
/// Percentages are expressed in percent (`40` means 40%). `basic_pct` is a
/// share of gross; every other allocation is a share of basic pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    pub gross: Decimal,
    pub basic_pct: Decimal,
    pub hra_pct: Decimal,
    pub pf_pct: Decimal,
    pub gratuity_pct: Decimal,
    pub voluntary_pf_pct: Option<Decimal>,
    pub nps_pct: Option<Decimal>,
    /// Appraisal raise applied to gross before anything else is computed.
    pub appraisal_pct: Option<Decimal>,
}

impl CompensationInput {
    /// Creates an input for `gross` using the default slider positions.
    pub fn with_defaults(gross: Decimal) -> Self {
        Self {
            gross,
            basic_pct: Decimal::from(40),
            hra_pct: Decimal::from(50),
            pf_pct: Decimal::from(12),
            gratuity_pct: Decimal::new(481, 2),
            voluntary_pf_pct: None,
            nps_pct: None,
            appraisal_pct: None,
        }
    }

    /// Gross after the appraisal raise, if any.
    pub fn effective_gross(&self) -> Decimal {
        effective_gross(self.gross, self.appraisal_pct.unwrap_or_default())
    }
}

/// Slider bounds offered for a percentage field. Advisory only; they are not
/// enforced by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedRange {
    pub field: &'static str,
    pub min: Decimal,
    pub max: Decimal,
}

impl SuggestedRange {
    pub fn contains(
        &self,
        value: Decimal,
    ) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SUGGESTED_RANGES: [SuggestedRange; 6] = [
    SuggestedRange { field: "basic_pct", min: dec!(20), max: dec!(50) },
    SuggestedRange { field: "hra_pct", min: dec!(30), max: dec!(60) },
    SuggestedRange { field: "pf_pct", min: dec!(10), max: dec!(20) },
    SuggestedRange { field: "gratuity_pct", min: dec!(4), max: dec!(5) },
    SuggestedRange { field: "voluntary_pf_pct", min: dec!(0), max: dec!(100) },
    SuggestedRange { field: "nps_pct", min: dec!(0), max: dec!(10) },
];

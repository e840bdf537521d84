use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive schedule.
///
/// `rate` is a fraction (`0.05` is 5%). `upper_bound` is inclusive; `None`
/// marks the open-ended top tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Whether `income` falls in this bracket, assuming every lower bracket
    /// has already been ruled out.
    pub fn covers(
        &self,
        income: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| income <= upper)
    }

    /// Tax owed on `income` under this bracket: base plus the marginal rate
    /// on the excess over the lower bound.
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.lower_bound) * self.rate
    }
}

use tracing::debug;

use crate::calculations::{TaxSchedule, compute_breakup_with, derive_net_income};
use crate::models::{BreakupOptions, CompensationInput, SalaryReport};
use crate::validation::ValidationError;

/// Runs the full computation for one input: validation, breakup, tax and
/// net income.
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    schedule: TaxSchedule,
    options: BreakupOptions,
}

impl SalaryCalculator {
    pub fn new(
        schedule: TaxSchedule,
        options: BreakupOptions,
    ) -> Self {
        Self { schedule, options }
    }

    /// Calculator over the built-in schedule.
    pub fn with_options(options: BreakupOptions) -> Self {
        Self::new(TaxSchedule::new_regime(), options)
    }

    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    pub fn options(&self) -> BreakupOptions {
        self.options
    }

    /// Validates `input` and computes its report.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the input fails
    /// [`CompensationInput::validate`]. Nothing past validation can fail.
    pub fn calculate(
        &self,
        input: &CompensationInput,
    ) -> Result<SalaryReport, ValidationError> {
        input.validate()?;

        let effective_gross = input.effective_gross();
        let breakup = compute_breakup_with(input, self.options, &self.schedule);
        let tax = self.schedule.tax_for(effective_gross);
        let net = derive_net_income(effective_gross, tax, &breakup);

        debug!(
            gross = %input.gross,
            %effective_gross,
            %tax,
            net_annual = %net.annual,
            "calculated salary report"
        );

        Ok(SalaryReport {
            effective_gross,
            breakup,
            tax,
            net,
        })
    }
}

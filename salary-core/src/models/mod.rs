mod compensation_input;
mod component;
mod salary_breakup;
mod salary_report;
mod saved_configuration;
mod tax_bracket;

pub use compensation_input::{CompensationInput, SUGGESTED_RANGES, SuggestedRange};
pub use component::Component;
pub use salary_breakup::{BreakupLine, BreakupOptions, RetirementPolicy, SalaryBreakup};
pub use salary_report::{NetIncome, ReportRow, SalaryReport};
pub use saved_configuration::SavedConfiguration;
pub use tax_bracket::TaxBracket;

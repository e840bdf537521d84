pub mod calculations;
pub mod models;
pub mod store;
pub mod validation;

pub use calculations::{
    SalaryCalculator, ScheduleError, TaxSchedule, compute_breakup, compute_breakup_with,
    derive_net_income, effective_gross, estimate_tax,
};
pub use models::*;
pub use store::{ConfigStore, StoreError};
pub use validation::{MAX_APPRAISAL_PCT, MAX_GROSS, ValidationError};

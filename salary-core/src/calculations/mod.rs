//! Salary computation engine.
//!
//! Tax estimation, component breakup and net-income derivation are pure
//! functions; [`SalaryCalculator`] composes them for a validated input.

pub mod breakup;
pub mod calculator;
pub mod common;
pub mod net_income;
pub mod tax_schedule;

pub use breakup::{compute_breakup, compute_breakup_with};
pub use calculator::SalaryCalculator;
pub use net_income::{derive_net_income, effective_gross};
pub use tax_schedule::{ScheduleError, TaxSchedule, estimate_tax};

//! File-backed collaborators of the salary engine: the saved configuration
//! store, report export and bracket-table loading.

pub mod bracket_loader;
pub mod config_store;
pub mod report_export;

pub use bracket_loader::{BracketLoaderError, BracketTableLoader};
pub use config_store::CsvConfigStore;
pub use report_export::{ReportExportError, export_report, write_report};

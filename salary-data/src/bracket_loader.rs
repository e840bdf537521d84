use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use salary_core::{ScheduleError, TaxBracket, TaxSchedule};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a bracket table.
#[derive(Debug, Error)]
pub enum BracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("invalid tax schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("cannot open bracket file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single row of a bracket table CSV.
///
/// - `lower_bound`: income at which the bracket starts
/// - `upper_bound`: inclusive upper limit (empty or `inf` for the top bracket)
/// - `base_tax`: tax owed at the lower bound
/// - `rate`: marginal rate as a fraction (e.g. `0.05` for 5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_upper_bound")]
    pub upper_bound: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

fn deserialize_upper_bound<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("inf") => Ok(None),
        Some(s) => s.parse::<Decimal>().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<BracketRecord> for TaxBracket {
    fn from(record: BracketRecord) -> Self {
        TaxBracket {
            lower_bound: record.lower_bound,
            upper_bound: record.upper_bound,
            base_tax: record.base_tax,
            rate: record.rate,
        }
    }
}

/// Loader for bracket tables stored as CSV.
///
/// ```csv
/// lower_bound,upper_bound,base_tax,rate
/// 0,300000,0,0
/// 300000,700000,0,0.05
/// 700000,,20000,0.10
/// ```
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parses bracket rows from `reader` and validates them as a schedule.
    pub fn parse<R: Read>(reader: R) -> Result<TaxSchedule, BracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut brackets = Vec::new();
        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            brackets.push(TaxBracket::from(record));
        }

        Ok(TaxSchedule::new(brackets)?)
    }

    /// Reads and parses the bracket table at `path`.
    pub fn load_file(path: &Path) -> Result<TaxSchedule, BracketLoaderError> {
        let file = File::open(path).map_err(|source| BracketLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let schedule = Self::parse(file)?;

        tracing::info!(
            path = %path.display(),
            brackets = schedule.brackets().len(),
            "loaded tax brackets"
        );
        Ok(schedule)
    }
}

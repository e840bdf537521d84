//! Single-row CSV persistence for [`SavedConfiguration`].
//!
//! ## CSV Format
//!
//! One header row and one data row. Headers are matched by name, so column
//! order does not matter.
//!
//! | Column | Required | Notes |
//! |---------------------------|----------|------------------------------|
//! | `CTC` | yes | annual gross |
//! | `Basic Salary (%)` | yes | percent of gross |
//! | `HRA (%)` | yes | percent of basic |
//! | `Provident Fund (PF) (%)` | yes | percent of basic |
//! | `Gratuity (%)` | yes | percent of basic |
//! | `Voluntary PF (%)` | no | empty cell or absent for none |
//! | `NPS (%)` | no | empty cell or absent for none |
//! | `Appraisal (%)` | no | empty cell or absent for none |
//!
//! ```csv
//! CTC,Basic Salary (%),HRA (%),Provident Fund (PF) (%),Gratuity (%)
//! 1200000,40.0,50.0,12.0,4.81
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use salary_core::{ConfigStore, SavedConfiguration, StoreError};
use tracing::{debug, warn};

/// Parses the first data row of a saved configuration.
///
/// A header with no data row counts as nothing saved.
pub fn read_config<R: Read>(reader: R) -> Result<SavedConfiguration, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    match reader.deserialize::<SavedConfiguration>().next() {
        Some(row) => row.map_err(|e| StoreError::Format(e.to_string())),
        None => Err(StoreError::NotFound),
    }
}

/// Writes `config` as a header row plus one data row.
pub fn write_config<W: Write>(
    writer: W,
    config: &SavedConfiguration,
) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .serialize(config)
        .map_err(|e| StoreError::Format(e.to_string()))?;
    writer.flush().map_err(|e| StoreError::Io(e.to_string()))
}

/// [`ConfigStore`] backed by a CSV file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfigStore {
    path: PathBuf,
}

impl CsvConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new contents are written to before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn replace_from(
        &self,
        staging: &Path,
        config: &SavedConfiguration,
    ) -> Result<(), StoreError> {
        let io_err = |e: io::Error| StoreError::Io(format!("{}: {e}", staging.display()));

        let file = File::create(staging).map_err(io_err)?;
        write_config(&file, config)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(staging, &self.path)
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))
    }
}

impl ConfigStore for CsvConfigStore {
    /// Writes to a staging file and renames it over the target, so readers
    /// see either the old record or the new one.
    fn save(
        &self,
        config: &SavedConfiguration,
    ) -> Result<(), StoreError> {
        let staging = self.staging_path();
        let result = self.replace_from(&staging, config);
        if result.is_err() {
            match fs::remove_file(&staging) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => {
                    warn!(path = %staging.display(), error = %e, "could not remove staging file");
                }
                _ => {}
            }
        } else {
            debug!(path = %self.path.display(), "saved configuration");
        }
        result
    }

    fn load(&self) -> Result<SavedConfiguration, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(StoreError::Io(format!("{}: {e}", self.path.display()))),
        };

        let config = read_config(file)?;
        debug!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
CTC,Basic Salary (%),HRA (%),Provident Fund (PF) (%),Gratuity (%)
1200000,40.0,50.0,12.0,4.81
";

    const FULL_CSV: &str = "\
CTC,Basic Salary (%),HRA (%),Provident Fund (PF) (%),Gratuity (%),Voluntary PF (%),NPS (%),Appraisal (%)
1500000,45,40,12,4.81,10,5,7.5
";

    fn sample() -> SavedConfiguration {
        SavedConfiguration {
            gross: dec!(1200000),
            basic_pct: dec!(40.0),
            hra_pct: dec!(50.0),
            pf_pct: dec!(12.0),
            gratuity_pct: dec!(4.81),
            voluntary_pf_pct: None,
            nps_pct: Some(dec!(5)),
            appraisal_pct: None,
        }
    }

    #[test]
    fn minimal_csv_parses_required_columns() {
        let config = read_config(MINIMAL_CSV.as_bytes()).expect("should parse minimal CSV");

        assert_eq!(config.gross, dec!(1200000));
        assert_eq!(config.basic_pct, dec!(40));
        assert_eq!(config.hra_pct, dec!(50));
        assert_eq!(config.pf_pct, dec!(12));
        assert_eq!(config.gratuity_pct, dec!(4.81));
        assert!(config.voluntary_pf_pct.is_none());
        assert!(config.nps_pct.is_none());
        assert!(config.appraisal_pct.is_none());
    }

    #[test]
    fn full_csv_parses_optional_columns() {
        let config = read_config(FULL_CSV.as_bytes()).expect("should parse full CSV");

        assert_eq!(config.voluntary_pf_pct, Some(dec!(10)));
        assert_eq!(config.nps_pct, Some(dec!(5)));
        assert_eq!(config.appraisal_pct, Some(dec!(7.5)));
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "\
Gratuity (%),CTC,HRA (%),Provident Fund (PF) (%),Basic Salary (%)
4.5,900000,45,11,35
";
        let config = read_config(csv.as_bytes()).expect("column order should not matter");

        assert_eq!(config.gross, dec!(900000));
        assert_eq!(config.basic_pct, dec!(35));
        assert_eq!(config.gratuity_pct, dec!(4.5));
    }

    #[test]
    fn header_only_is_not_found() {
        let csv = "CTC,Basic Salary (%),HRA (%),Provident Fund (PF) (%),Gratuity (%)\n";

        assert!(matches!(read_config(csv.as_bytes()), Err(StoreError::NotFound)));
    }

    #[test]
    fn missing_required_column_is_format_error() {
        let csv = "CTC,Basic Salary (%),HRA (%),Gratuity (%)\n1000,40,50,4.81\n";

        assert!(matches!(read_config(csv.as_bytes()), Err(StoreError::Format(_))));
    }

    #[test]
    fn non_numeric_value_is_format_error() {
        let csv = "\
CTC,Basic Salary (%),HRA (%),Provident Fund (PF) (%),Gratuity (%)
lots,40,50,12,4.81
";

        assert!(matches!(read_config(csv.as_bytes()), Err(StoreError::Format(_))));
    }

    #[test]
    fn written_config_reads_back() {
        let mut buffer = Vec::new();

        write_config(&mut buffer, &sample()).expect("write should succeed");
        let restored = read_config(buffer.as_slice()).expect("read should succeed");

        assert_eq!(restored, sample());
    }

    #[test]
    fn written_config_has_expected_header() {
        let mut buffer = Vec::new();

        write_config(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with(
            "CTC,Basic Salary (%),HRA (%),Provident Fund (PF) (%),Gratuity (%),Voluntary PF (%),NPS (%),Appraisal (%)\n"
        ));
    }

    #[test]
    fn staging_path_is_a_sibling() {
        let store = CsvConfigStore::new("/tmp/salary/saved_config.csv");

        assert_eq!(
            store.staging_path(),
            PathBuf::from("/tmp/salary/saved_config.csv.tmp")
        );
    }
}

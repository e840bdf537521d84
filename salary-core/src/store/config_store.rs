use thiserror::Error;

use crate::models::SavedConfiguration;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved configuration found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("malformed configuration: {0}")]
    Format(String),
}

/// Persistence for the single saved configuration record.
///
/// `save` replaces any previous record as a whole; the last writer wins.
/// `load` returns [`StoreError::NotFound`] when nothing has been saved, which
/// callers treat as a recoverable condition.
pub trait ConfigStore {
    fn save(
        &self,
        config: &SavedConfiguration,
    ) -> Result<(), StoreError>;

    fn load(&self) -> Result<SavedConfiguration, StoreError>;
}

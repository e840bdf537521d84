use rust_decimal::Decimal;
use thiserror::Error;

/// A command-line value that is not a usable amount or percentage.
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("expected a number, got an empty value")]
    Empty,

    #[error("invalid number '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Parses a flag value such as `--gross 12,00,000` or `--basic 40` into a
/// [`Decimal`].
///
/// Commas are dropped, so both Indian (`12,00,000`) and western
/// (`1,200,000`) grouping work. A blank value is an error; omit the flag to
/// fall back to its default.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let digits = s.trim().replace(',', "");
    if digits.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    digits.parse().map_err(|source| ParseDecimalError::Invalid {
        input: s.to_string(),
        source,
    })
}

/// Formats an optional [`Decimal`] for display, using "—" when `None`.
pub fn opt_decimal_display(d: &Option<Decimal>) -> String {
    d.as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}

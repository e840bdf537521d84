use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CompensationInput;

/// The single persisted record of the last-used inputs.
///
/// Field names on disk match the column headers of the saved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    #[serde(rename = "CTC")]
    pub gross: Decimal,
    #[serde(rename = "Basic Salary (%)")]
    pub basic_pct: Decimal,
    #[serde(rename = "HRA (%)")]
    pub hra_pct: Decimal,
    #[serde(rename = "Provident Fund (PF) (%)")]
    pub pf_pct: Decimal,
    #[serde(rename = "Gratuity (%)")]
    pub gratuity_pct: Decimal,
    #[serde(rename = "Voluntary PF (%)", default)]
    pub voluntary_pf_pct: Option<Decimal>,
    #[serde(rename = "NPS (%)", default)]
    pub nps_pct: Option<Decimal>,
    #[serde(rename = "Appraisal (%)", default)]
    pub appraisal_pct: Option<Decimal>,
}

impl From<&CompensationInput> for SavedConfiguration {
    fn from(input: &CompensationInput) -> Self {
        Self {
            gross: input.gross,
            basic_pct: input.basic_pct,
            hra_pct: input.hra_pct,
            pf_pct: input.pf_pct,
            gratuity_pct: input.gratuity_pct,
            voluntary_pf_pct: input.voluntary_pf_pct,
            nps_pct: input.nps_pct,
            appraisal_pct: input.appraisal_pct,
        }
    }
}

impl From<SavedConfiguration> for CompensationInput {
    fn from(config: SavedConfiguration) -> Self {
        Self {
            gross: config.gross,
            basic_pct: config.basic_pct,
            hra_pct: config.hra_pct,
            pf_pct: config.pf_pct,
            gratuity_pct: config.gratuity_pct,
            voluntary_pf_pct: config.voluntary_pf_pct,
            nps_pct: config.nps_pct,
            appraisal_pct: config.appraisal_pct,
        }
    }
}

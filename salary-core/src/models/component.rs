use serde::{Deserialize, Serialize};

/// Named line of a salary breakup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Basic,
    HousingAllowance,
    SpecialAllowance,
    RetirementFund,
    VoluntaryRetirementFund,
    PensionScheme,
    Gratuity,
    TaxDeducted,
}

impl Component {
    /// Label used in tables and exported reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Salary",
            Self::HousingAllowance => "HRA",
            Self::SpecialAllowance => "Special Allowance",
            Self::RetirementFund => "Provident Fund (PF)",
            Self::VoluntaryRetirementFund => "Voluntary PF (VPF)",
            Self::PensionScheme => "NPS",
            Self::Gratuity => "Gratuity",
            Self::TaxDeducted => "Tax Deducted",
        }
    }

    /// Retirement lines are withheld from take-home pay.
    pub fn is_retirement(&self) -> bool {
        matches!(
            self,
            Self::RetirementFund | Self::VoluntaryRetirementFund | Self::PensionScheme
        )
    }
}

impl std::fmt::Display for Component {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

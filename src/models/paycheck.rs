//! Paycheck and income models
//!
//! Amounts on [`PaycheckInfo`] are per paycheck; `frequency` says how often
//! one arrives.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::ValidationError;

/// How often the primary paycheck arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    Weekly,
    #[default]
    BiWeekly,
    Monthly,
}

impl PayFrequency {
    pub const ALL: [PayFrequency; 3] = [Self::Weekly, Self::BiWeekly, Self::Monthly];

    /// Average number of paychecks per calendar month
    pub fn paychecks_per_month(&self) -> f64 {
        match self {
            Self::Weekly => 52.0 / 12.0,
            Self::BiWeekly => 26.0 / 12.0,
            Self::Monthly => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "bi-weekly" | "biweekly" => Ok(Self::BiWeekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(ValidationError::unknown_variant(
                "PaycheckInfo",
                "frequency",
                other,
                &Self::ALL.map(|f| f.as_str()),
            )),
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a secondary income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Monthly,
    Quarterly,
    Yearly,
    Irregular,
}

impl IncomeFrequency {
    pub const ALL: [IncomeFrequency; 4] = [
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
        Self::Irregular,
    ];

    /// Fraction of one payout that lands in an average month
    ///
    /// Irregular income has no dependable monthly share.
    pub fn monthly_factor(&self) -> Option<f64> {
        match self {
            Self::Monthly => Some(1.0),
            Self::Quarterly => Some(1.0 / 3.0),
            Self::Yearly => Some(1.0 / 12.0),
            Self::Irregular => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Irregular => "irregular",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" => Ok(Self::Yearly),
            "irregular" => Ok(Self::Irregular),
            other => Err(ValidationError::unknown_variant(
                "OtherIncome",
                "frequency",
                other,
                &Self::ALL.map(|f| f.as_str()),
            )),
        }
    }
}

/// A secondary income source (rental income, side job)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherIncome {
    pub name: String,
    pub amount: Money,
    pub frequency: IncomeFrequency,
}

/// Breakdown of the primary paycheck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckInfo {
    pub gross_salary: Money,
    pub frequency: PayFrequency,
    /// Health insurance, dental and similar
    pub pre_tax_deductions: Money,
    /// Federal, state and payroll taxes
    pub taxes_and_deductions: Money,
    /// 401k and similar
    pub retirement_contribution: Money,
    /// Take-home pay as entered by the user
    pub net_pay: Money,
    #[serde(default)]
    pub other_income_sources: Vec<OtherIncome>,
}

impl PaycheckInfo {
    /// Validate the paycheck breakdown
    ///
    /// `net_pay` is not checked here; see the reconciliation in
    /// `services::paycheck`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("grossSalary", self.gross_salary),
            ("preTaxDeductions", self.pre_tax_deductions),
            ("taxesAndDeductions", self.taxes_and_deductions),
            ("retirementContribution", self.retirement_contribution),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, amount)| amount.is_negative()) {
            return Err(ValidationError::negative("PaycheckInfo", "", *field));
        }

        for source in &self.other_income_sources {
            if source.amount.is_negative() {
                return Err(ValidationError::negative(
                    "OtherIncome",
                    source.name.as_str(),
                    "amount",
                ));
            }
        }
        Ok(())
    }
}

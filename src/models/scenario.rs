//! Debt payoff scenario model
//!
//! The output of one payoff simulation. Scenarios are derived on demand and
//! never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;
use super::period::Month;
use crate::error::ValidationError;

/// Order in which surplus payments are directed at debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PayoffStrategy {
    /// Smallest balance first
    Snowball,
    /// Highest interest rate first
    #[default]
    Avalanche,
}

impl PayoffStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snowball => "Snowball",
            Self::Avalanche => "Avalanche",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "snowball" => Ok(Self::Snowball),
            "avalanche" => Ok(Self::Avalanche),
            other => Err(ValidationError::unknown_variant(
                "PayoffScenario",
                "method",
                other,
                &["Snowball", "Avalanche"],
            )),
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PayoffStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Total remaining balance across all debts at the end of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedBalance {
    pub month: Month,
    pub balance: Money,
}

/// When an individual debt reached zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub debt_id: DebtId,
    pub name: String,
    /// 1-based month index within the simulation
    pub month_number: u32,
    pub month: Month,
}

/// Result of a Snowball or Avalanche payoff simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffScenario {
    pub method: PayoffStrategy,
    pub total_interest_paid: Money,
    pub months_to_payoff: u32,
    pub projected_balances: Vec<ProjectedBalance>,
    /// Debts in the order they were paid off
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub debt_payoffs: Vec<DebtPayoff>,
}

impl PayoffScenario {
    /// A scenario for an empty debt list
    pub fn empty(method: PayoffStrategy) -> Self {
        Self {
            method,
            total_interest_paid: Money::zero(),
            months_to_payoff: 0,
            projected_balances: Vec::new(),
            debt_payoffs: Vec::new(),
        }
    }

    /// The month the last debt is paid off
    pub fn debt_free_month(&self) -> Option<Month> {
        self.projected_balances.last().map(|p| p.month)
    }

    /// Month number in which the given debt reached zero
    pub fn payoff_month_of(&self, debt_id: &DebtId) -> Option<u32> {
        self.debt_payoffs
            .iter()
            .find(|p| &p.debt_id == debt_id)
            .map(|p| p.month_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!(PayoffStrategy::parse("snowball").unwrap(), PayoffStrategy::Snowball);
        assert_eq!(PayoffStrategy::parse("Avalanche").unwrap(), PayoffStrategy::Avalanche);
        assert_eq!(PayoffStrategy::parse("blizzard").unwrap_err().field, "method");
    }

    #[test]
    fn test_empty_scenario() {
        let scenario = PayoffScenario::empty(PayoffStrategy::Snowball);
        assert_eq!(scenario.months_to_payoff, 0);
        assert!(scenario.total_interest_paid.is_zero());
        assert!(scenario.debt_free_month().is_none());
    }

    #[test]
    fn test_serialization_shape() {
        let scenario = PayoffScenario {
            method: PayoffStrategy::Avalanche,
            total_interest_paid: Money::from_cents(12345),
            months_to_payoff: 1,
            projected_balances: vec![ProjectedBalance {
                month: Month::new(2025, 1).unwrap(),
                balance: Money::zero(),
            }],
            debt_payoffs: Vec::new(),
        };
        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["method"], "Avalanche");
        assert_eq!(json["totalInterestPaid"], 123.45);
        assert_eq!(json["monthsToPayoff"], 1);
        assert_eq!(json["projectedBalances"][0]["month"], "2025-01");
        assert!(json.get("debtPayoffs").is_none());
    }
}

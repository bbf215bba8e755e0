//! Budget category model
//!
//! A category tracks one month of planned and actual spending plus whatever
//! was carried over from the previous month.

use serde::{Deserialize, Serialize};

use super::ids::CategoryId;
use super::money::Money;
use crate::error::ValidationError;

/// A budget category for the active month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub id: CategoryId,

    pub name: String,

    /// Amount planned for this month
    pub budgeted: Money,

    /// Amount spent so far this month
    pub actual_spent: Money,

    /// Sinking funds keep their balance, positive or negative, across months
    pub is_sinking_fund: bool,

    /// Balance carried in from the previous month
    pub rollover: Money,
}

impl BudgetCategory {
    /// Create a regular category with nothing spent and no rollover
    pub fn new(name: impl Into<String>, budgeted: Money) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            budgeted,
            actual_spent: Money::zero(),
            is_sinking_fund: false,
            rollover: Money::zero(),
        }
    }

    /// Create a sinking fund seeded with an existing balance
    pub fn sinking_fund(name: impl Into<String>, budgeted: Money, rollover: Money) -> Self {
        Self {
            is_sinking_fund: true,
            rollover,
            ..Self::new(name, budgeted)
        }
    }

    /// Validate the category
    ///
    /// `rollover` is unchecked: a sinking fund may carry an overspend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new(
                "BudgetCategory",
                self.id.as_str(),
                "name",
                "must not be empty",
            ));
        }
        if self.budgeted.is_negative() {
            return Err(ValidationError::negative(
                "BudgetCategory",
                self.id.as_str(),
                "budgeted",
            ));
        }
        if self.actual_spent.is_negative() {
            return Err(ValidationError::negative(
                "BudgetCategory",
                self.id.as_str(),
                "actualSpent",
            ));
        }
        if !self.is_sinking_fund && self.rollover.is_negative() {
            return Err(ValidationError::new(
                "BudgetCategory",
                self.id.as_str(),
                "rollover",
                "must not be negative for a regular category",
            ));
        }
        Ok(())
    }
}

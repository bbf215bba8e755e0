//! Debt model
//!
//! Outstanding debts fed to the payoff simulator.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;
use crate::error::ValidationError;

/// A single outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: DebtId,

    pub name: String,

    /// Amount still owed
    pub current_balance: Money,

    /// Annual percentage rate as a fraction (0.055 for 5.5%)
    pub interest_rate: f64,

    /// Lender's required monthly payment
    pub minimum_payment: Money,

    /// What the user is actually paying each month
    pub actual_payment: Money,

    /// Tie-break ordinal; lower runs first
    pub priority: u32,
}

impl Debt {
    /// Create a debt paying exactly its minimum
    pub fn new(
        name: impl Into<String>,
        current_balance: Money,
        interest_rate: f64,
        minimum_payment: Money,
        priority: u32,
    ) -> Self {
        Self {
            id: DebtId::generate(),
            name: name.into(),
            current_balance,
            interest_rate,
            minimum_payment,
            actual_payment: minimum_payment,
            priority,
        }
    }

    pub fn is_paid_off(&self) -> bool {
        self.current_balance.is_zero()
    }

    /// Validate the debt
    ///
    /// A payment below the minimum is accepted only when it clears the
    /// remaining balance.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let id = self.id.as_str();

        if self.name.trim().is_empty() {
            return Err(ValidationError::new("Debt", id, "name", "must not be empty"));
        }
        if self.current_balance.is_negative() {
            return Err(ValidationError::negative("Debt", id, "currentBalance"));
        }
        if !self.interest_rate.is_finite() || !(0.0..1.0).contains(&self.interest_rate) {
            return Err(ValidationError::new(
                "Debt",
                id,
                "interestRate",
                format!("must be in [0, 1), got {}", self.interest_rate),
            ));
        }
        if self.minimum_payment.is_negative() {
            return Err(ValidationError::negative("Debt", id, "minimumPayment"));
        }
        if self.actual_payment.is_negative() {
            return Err(ValidationError::negative("Debt", id, "actualPayment"));
        }
        if self.actual_payment < self.minimum_payment
            && self.actual_payment < self.current_balance
        {
            return Err(ValidationError::new(
                "Debt",
                id,
                "actualPayment",
                format!(
                    "{} is below the minimum payment of {}",
                    self.actual_payment, self.minimum_payment
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} @ {:.2}%)",
            self.name,
            self.current_balance,
            self.interest_rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_loan() -> Debt {
        Debt::new(
            "Student Loan",
            Money::from_cents(2_200_000),
            0.055,
            Money::from_cents(25000),
            1,
        )
    }

    #[test]
    fn test_valid_debt() {
        assert!(student_loan().validate().is_ok());
    }

    #[test]
    fn test_rate_out_of_range() {
        let mut debt = student_loan();
        debt.interest_rate = 1.0;
        assert_eq!(debt.validate().unwrap_err().field, "interestRate");
        debt.interest_rate = -0.01;
        assert_eq!(debt.validate().unwrap_err().field, "interestRate");
        debt.interest_rate = f64::NAN;
        assert_eq!(debt.validate().unwrap_err().field, "interestRate");
    }

    #[test]
    fn test_underpayment_rejected() {
        let mut debt = student_loan();
        debt.actual_payment = Money::from_cents(10000);
        let err = debt.validate().unwrap_err();
        assert_eq!(err.field, "actualPayment");
        assert_eq!(err.id, debt.id.as_str());
    }

    #[test]
    fn test_final_payment_below_minimum_allowed() {
        let mut debt = student_loan();
        debt.current_balance = Money::from_cents(12000);
        debt.actual_payment = Money::from_cents(12000);
        assert!(debt.validate().is_ok());

        debt.current_balance = Money::zero();
        debt.actual_payment = Money::zero();
        assert!(debt.validate().is_ok());
        assert!(debt.is_paid_off());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut debt = student_loan();
        debt.current_balance = Money::from_cents(-1);
        assert_eq!(debt.validate().unwrap_err().field, "currentBalance");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(student_loan()).unwrap();
        assert_eq!(json["currentBalance"], 22000.0);
        assert_eq!(json["interestRate"], 0.055);
        assert_eq!(json["minimumPayment"], 250.0);
        assert_eq!(json["actualPayment"], 250.0);
        assert_eq!(json["priority"], 1);
    }
}

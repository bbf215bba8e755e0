//! Account model
//!
//! Represents tracked financial accounts (checking, savings, credit cards, etc.)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use crate::error::ValidationError;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
    /// Brokerage or retirement account
    Investment,
    /// Credit card
    CreditCard,
    /// Installment loan
    Loan,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        Self::Checking,
        Self::Savings,
        Self::Investment,
        Self::CreditCard,
        Self::Loan,
    ];

    /// Returns true if this account type normally represents money owed
    ///
    /// Only a default for new accounts; net worth uses the account's own
    /// `is_liability` flag.
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::CreditCard | Self::Loan)
    }

    /// The snapshot spelling of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::CreditCard => "credit_card",
            Self::Loan => "loan",
        }
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            "credit_card" | "credit" | "creditcard" => Ok(Self::CreditCard),
            "loan" => Ok(Self::Loan),
            other => Err(ValidationError::unknown_variant(
                "Account",
                "type",
                other,
                &Self::ALL.map(|t| t.as_str()),
            )),
        }
    }

    /// Display order: assets first, then liabilities
    pub fn sort_order(&self) -> u8 {
        match self {
            Self::Checking => 0,
            Self::Savings => 1,
            Self::Investment => 2,
            Self::CreditCard => 10,
            Self::Loan => 11,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Investment => write!(f, "Investment"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Loan => write!(f, "Loan"),
        }
    }
}

/// A tracked financial account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Main Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance as an absolute amount; for liabilities this is the
    /// amount owed
    pub balance: Money,

    /// Whether the balance counts against net worth
    pub is_liability: bool,
}

impl Account {
    /// Create a new account with a fresh id; liability follows the type
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        Self {
            id: AccountId::generate(),
            name: name.into(),
            account_type,
            balance,
            is_liability: account_type.is_liability(),
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new(
                "Account",
                self.id.as_str(),
                "name",
                "must not be empty",
            ));
        }

        if self.balance.is_negative() {
            return Err(ValidationError::negative(
                "Account",
                self.id.as_str(),
                "balance",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

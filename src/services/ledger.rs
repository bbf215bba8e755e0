//! Account ledger
//!
//! Derives net worth from the account list. Balances are stored as absolute
//! amounts; the sign comes from each account's `is_liability` flag.

use std::collections::HashMap;

use crate::error::{PlanResult, ValidationError};
use crate::models::{Account, AccountType, Money};

/// Net worth of a set of accounts: assets minus liabilities
///
/// Sums integer cents, so the result does not depend on account order.
/// An empty list is worth zero. A total outside the i64 range of cents is a
/// validation error on the account that pushed it over.
pub fn net_worth(accounts: &[Account]) -> PlanResult<Money> {
    accounts
        .iter()
        .try_fold(Money::zero(), |total, account| add_signed(total, account))
}

fn add_signed(total: Money, account: &Account) -> PlanResult<Money> {
    let sum = if account.is_liability {
        total.checked_sub(account.balance)
    } else {
        total.checked_add(account.balance)
    };
    sum.ok_or_else(|| ValidationError::out_of_range("Account", account.id.as_str(), "balance").into())
}

/// Accounts of one type with their subtotal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTypeGroup {
    pub account_type: AccountType,
    pub accounts: Vec<Account>,
    /// Signed subtotal (liabilities negative)
    pub total: Money,
}

impl AccountTypeGroup {
    fn new(account_type: AccountType) -> Self {
        Self {
            account_type,
            accounts: Vec::new(),
            total: Money::zero(),
        }
    }

    fn add_account(&mut self, account: &Account) -> PlanResult<()> {
        self.total = add_signed(self.total, account)?;
        self.accounts.push(account.clone());
        Ok(())
    }
}

/// Assets, liabilities and net worth for the dashboard header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetWorthSummary {
    /// Sum of non-liability balances
    pub total_assets: Money,
    /// Sum of liability balances, as a positive amount owed
    pub total_liabilities: Money,
    pub net_worth: Money,
    /// Groups sorted assets first
    pub groups: Vec<AccountTypeGroup>,
}

impl NetWorthSummary {
    pub fn from_accounts(accounts: &[Account]) -> PlanResult<Self> {
        let mut groups: HashMap<AccountType, AccountTypeGroup> = HashMap::new();
        let mut total_assets = Money::zero();
        let mut total_liabilities = Money::zero();

        for account in accounts {
            groups
                .entry(account.account_type)
                .or_insert_with(|| AccountTypeGroup::new(account.account_type))
                .add_account(account)?;

            let total = if account.is_liability {
                &mut total_liabilities
            } else {
                &mut total_assets
            };
            *total = total.checked_add(account.balance).ok_or_else(|| {
                ValidationError::out_of_range("Account", account.id.as_str(), "balance")
            })?;
        }

        let mut groups: Vec<_> = groups.into_values().collect();
        groups.sort_by_key(|g| g.account_type.sort_order());

        Ok(Self {
            total_assets,
            total_liabilities,
            net_worth: net_worth(accounts)?,
            groups,
        })
    }

    pub fn account_count(&self) -> usize {
        self.groups.iter().map(|g| g.accounts.len()).sum()
    }
}

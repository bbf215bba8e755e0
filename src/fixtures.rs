//! Starter data for new users
//!
//! Plain records the coordinating layer can hand to the planning core when
//! the user has not entered anything yet, or when resetting the dashboard.
//! Paycheck amounts are per paycheck.

use crate::models::{
    Account, AccountId, AccountType, AppConfig, BudgetCategory, CategoryId, Debt, DebtId,
    IncomeFrequency, Money, Month, OtherIncome, PayFrequency, PaycheckInfo,
};

pub const DEFAULT_USER_ID: &str = "local-user";

pub fn default_paycheck_info() -> PaycheckInfo {
    PaycheckInfo {
        gross_salary: Money::from_cents(300_000),
        frequency: PayFrequency::BiWeekly,
        pre_tax_deductions: Money::from_cents(15_000),
        taxes_and_deductions: Money::from_cents(70_000),
        retirement_contribution: Money::from_cents(25_000),
        // 3000 - 150 - 700 - 250
        net_pay: Money::from_cents(190_000),
        other_income_sources: vec![OtherIncome {
            name: "Freelance Work".into(),
            amount: Money::from_cents(20_000),
            frequency: IncomeFrequency::Irregular,
        }],
    }
}

fn account(id: &str, name: &str, account_type: AccountType, cents: i64) -> Account {
    Account {
        id: AccountId::from(id),
        name: name.into(),
        account_type,
        balance: Money::from_cents(cents),
        is_liability: account_type.is_liability(),
    }
}

/// A mix of assets and one credit card liability
pub fn default_accounts() -> Vec<Account> {
    vec![
        account("acc-1", "Main Checking", AccountType::Checking, 250_000),
        account("acc-2", "Emergency Fund", AccountType::Savings, 1_000_000),
        account("acc-3", "Visa Rewards Card", AccountType::CreditCard, 85_055),
        account("acc-4", "Brokerage Account", AccountType::Investment, 1_500_000),
    ]
}

fn category(id: &str, name: &str, budgeted: i64, sinking: bool, rollover: i64) -> BudgetCategory {
    BudgetCategory {
        id: CategoryId::from(id),
        name: name.into(),
        budgeted: Money::from_cents(budgeted),
        actual_spent: Money::zero(),
        is_sinking_fund: sinking,
        rollover: Money::from_cents(rollover),
    }
}

/// Common expense categories plus one sinking fund
pub fn default_budget_categories() -> Vec<BudgetCategory> {
    vec![
        category("cat-1", "Housing", 150_000, false, 0),
        category("cat-2", "Groceries", 40_000, false, 0),
        category("cat-3", "Transportation", 15_000, false, 0),
        category("cat-4", "New Car Fund", 25_000, true, 75_000),
    ]
}

fn debt(id: &str, name: &str, balance: i64, rate: f64, minimum: i64, priority: u32) -> Debt {
    Debt {
        id: DebtId::from(id),
        name: name.into(),
        current_balance: Money::from_cents(balance),
        interest_rate: rate,
        minimum_payment: Money::from_cents(minimum),
        actual_payment: Money::from_cents(minimum),
        priority,
    }
}

pub fn default_debts() -> Vec<Debt> {
    vec![
        debt("debt-1", "Student Loan", 2_200_000, 0.055, 25_000, 1),
        debt("debt-2", "Car Loan", 800_000, 0.042, 35_000, 2),
    ]
}

pub fn default_active_month() -> Month {
    Month::new(2025, 1).unwrap_or_else(|_| Month::current())
}

/// All starter data assembled into one snapshot
pub fn default_snapshot() -> AppConfig {
    AppConfig {
        user_id: DEFAULT_USER_ID.into(),
        active_month: default_active_month(),
        budget: default_budget_categories(),
        paycheck_info: default_paycheck_info(),
        debts: default_debts(),
        accounts: default_accounts(),
    }
}

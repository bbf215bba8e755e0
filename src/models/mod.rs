//! Core data models for ProserPlan
//!
//! This module contains the records the dashboard hands to the planning
//! core (accounts, budget categories, debts, paycheck info) and the values
//! the core derives from them.

pub mod account;
pub mod app_config;
pub mod category;
pub mod debt;
pub mod ids;
pub mod money;
pub mod paycheck;
pub mod period;
pub mod scenario;

pub use account::{Account, AccountType};
pub use app_config::AppConfig;
pub use category::BudgetCategory;
pub use debt::Debt;
pub use ids::{AccountId, CategoryId, DebtId};
pub use money::Money;
pub use paycheck::{IncomeFrequency, OtherIncome, PayFrequency, PaycheckInfo};
pub use period::Month;
pub use scenario::{DebtPayoff, PayoffScenario, PayoffStrategy, ProjectedBalance};

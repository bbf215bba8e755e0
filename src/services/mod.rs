//! Planning services
//!
//! Pure functions over the snapshot records. Nothing here touches the
//! filesystem; callers pass records in and get derived figures back.

pub mod budget;
pub mod ledger;
pub mod paycheck;
pub mod payoff;

pub use budget::{advance_all, advance_period, remaining, total_budget_variance, BudgetOverview};
pub use ledger::{net_worth, AccountTypeGroup, NetWorthSummary};
pub use paycheck::{monthly_income, reconcile, MonthlyIncome, Reconciliation, DEFAULT_RECONCILE_TOLERANCE};
pub use payoff::{
    compare_strategies, simulate, simulate_with_abort, AbortSignal, PaymentBasis,
    SimulationOptions, StrategyComparison, DEFAULT_MAX_MONTHS,
};

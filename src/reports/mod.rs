//! Reports module for ProserPlan
//!
//! Terminal reports for the dashboard, net worth, budget, debt payoff and
//! paycheck views.

pub mod budget_overview;
pub mod dashboard;
pub mod net_worth;
pub mod paycheck;
pub mod payoff;

pub use budget_overview::{BudgetOverviewReport, CategoryReportRow};
pub use dashboard::{DashboardReport, DebtOutlook};
pub use net_worth::NetWorthReport;
pub use paycheck::PaycheckReport;
pub use payoff::{format_divergence, PayoffReport};

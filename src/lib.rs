//! ProserPlan - personal finance planning core
//!
//! This library computes the figures behind a personal finance dashboard:
//! net worth across accounts, budget rollover with sinking funds,
//! Snowball/Avalanche debt payoff projections and paycheck reconciliation.
//! Every computation is a pure function over a snapshot of user records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core records (accounts, categories, debts, paycheck, money)
//! - `services`: The planning computations
//! - `fixtures`: Starter data for new users
//! - `snapshot`: JSON/YAML snapshot files
//! - `config`: Settings and path management
//! - `reports` / `export`: Terminal reports and CSV/JSON output
//! - `cli`: Command handlers for the `proserplan` binary
//!
//! # Example
//!
//! ```rust
//! use proserplan::fixtures;
//! use proserplan::models::{Money, Month, PayoffStrategy};
//! use proserplan::services::{net_worth, simulate, SimulationOptions};
//!
//! let snapshot = fixtures::default_snapshot();
//! assert_eq!(net_worth(&snapshot.accounts)?.cents(), 2_664_945);
//!
//! let options = SimulationOptions::starting(Month::new(2025, 1)?);
//! let plan = simulate(&snapshot.debts, PayoffStrategy::Avalanche, Money::zero(), &options)?;
//! assert!(plan.months_to_payoff > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod snapshot;

pub use error::{PlanError, PlanResult, ValidationError};
pub use models::AppConfig;
pub use services::{
    advance_period, compare_strategies, net_worth, reconcile, remaining, simulate,
    simulate_with_abort, total_budget_variance, AbortSignal,
};

//! CLI command handlers
//!
//! Bridges clap argument parsing in `main.rs` with the planning services
//! and reports.

pub mod budget;
pub mod debts;
pub mod report;
pub mod snapshot;

use std::path::Path;

use crate::error::PlanResult;
use crate::fixtures;
use crate::models::AppConfig;

pub use budget::{handle_budget_command, BudgetArgs};
pub use debts::{handle_debts_command, DebtsArgs};
pub use report::{handle_net_worth_command, handle_paycheck_command, handle_summary_command};
pub use snapshot::{handle_config_command, handle_defaults_command, DefaultsArgs, SnapshotFormatArg};

/// Load the snapshot at `path`, or the starter data when no path is given
pub fn load_snapshot_or_defaults(path: Option<&Path>) -> PlanResult<AppConfig> {
    match path {
        Some(path) => crate::snapshot::load_snapshot(path),
        None => {
            tracing::debug!("no snapshot given, using starter data");
            Ok(fixtures::default_snapshot())
        }
    }
}

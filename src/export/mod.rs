//! Export module for ProserPlan
//!
//! - CSV: month-by-month payoff schedules (spreadsheet-compatible)
//! - JSON: a payoff scenario with the inputs that produced it

pub mod csv;
pub mod json;

pub use self::csv::{export_comparison_csv, export_payoff_schedule_csv};
pub use self::json::{export_scenario_json, ScenarioExport, EXPORT_SCHEMA_VERSION};

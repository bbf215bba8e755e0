//! JSON export of a payoff scenario

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::models::{Money, Month, PayoffScenario};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A scenario together with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub start_month: Month,
    pub extra_monthly_budget: Money,
    pub debt_count: usize,
    pub scenario: PayoffScenario,
}

impl ScenarioExport {
    pub fn new(
        scenario: PayoffScenario,
        start_month: Month,
        extra_monthly_budget: Money,
        debt_count: usize,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            start_month,
            extra_monthly_budget,
            debt_count,
            scenario,
        }
    }
}

/// Write a pretty-printed scenario export
pub fn export_scenario_json<W: Write>(export: &ScenarioExport, writer: &mut W) -> PlanResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| PlanError::Export(format!("Failed to serialize scenario: {}", e)))?;
    writeln!(writer).map_err(|e| PlanError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::PayoffStrategy;
    use crate::services::{simulate, SimulationOptions};

    #[test]
    fn test_scenario_export_shape() {
        let start = Month::new(2025, 1).unwrap();
        let debts = fixtures::default_debts();
        let scenario = simulate(
            &debts,
            PayoffStrategy::Avalanche,
            Money::zero(),
            &SimulationOptions::starting(start),
        )
        .unwrap();
        let export = ScenarioExport::new(scenario.clone(), start, Money::zero(), debts.len());

        let mut output = Vec::new();
        export_scenario_json(&export, &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["schemaVersion"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["startMonth"], "2025-01");
        assert_eq!(value["debtCount"], 2);
        assert_eq!(value["scenario"]["method"], "Avalanche");
        assert_eq!(value["scenario"]["monthsToPayoff"], scenario.months_to_payoff);
        assert_eq!(
            value["scenario"]["projectedBalances"][0]["month"],
            "2025-01"
        );

        let parsed: ScenarioExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.scenario, scenario);
    }
}

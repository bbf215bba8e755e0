//! CSV export of payoff schedules

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{PlanError, PlanResult};
use crate::models::{PayoffScenario, ProjectedBalance};
use crate::services::StrategyComparison;

fn export_err(e: impl std::fmt::Display) -> PlanError {
    PlanError::Export(e.to_string())
}

/// Debt names paid off in each month, keyed by month number
fn payoffs_by_month(scenario: &PayoffScenario) -> BTreeMap<u32, Vec<&str>> {
    let mut by_month: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for payoff in &scenario.debt_payoffs {
        by_month
            .entry(payoff.month_number)
            .or_default()
            .push(payoff.name.as_str());
    }
    by_month
}

fn amount(balance: Option<&ProjectedBalance>) -> String {
    balance
        .map(|b| format!("{:.2}", b.balance.to_decimal()))
        .unwrap_or_default()
}

/// Write one row per simulated month
///
/// Columns: `Month Number,Month,Total Balance,Paid Off`. Debts paid off in
/// the same month are joined with `; `.
pub fn export_payoff_schedule_csv<W: Write>(
    scenario: &PayoffScenario,
    writer: W,
) -> PlanResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["Month Number", "Month", "Total Balance", "Paid Off"])
        .map_err(export_err)?;

    let payoffs = payoffs_by_month(scenario);
    for (index, projected) in scenario.projected_balances.iter().enumerate() {
        let month_number = index as u32 + 1;
        let paid_off = payoffs
            .get(&month_number)
            .map(|names| names.join("; "))
            .unwrap_or_default();

        csv.write_record([
            month_number.to_string(),
            projected.month.to_string(),
            amount(Some(projected)),
            paid_off,
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)
}

/// Write Snowball and Avalanche balances side by side
///
/// Runs past the end of the shorter schedule are left blank.
pub fn export_comparison_csv<W: Write>(
    comparison: &StrategyComparison,
    writer: W,
) -> PlanResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["Month Number", "Month", "Snowball Balance", "Avalanche Balance"])
        .map_err(export_err)?;

    let snowball = &comparison.snowball.projected_balances;
    let avalanche = &comparison.avalanche.projected_balances;
    let months = snowball.len().max(avalanche.len());

    for index in 0..months {
        let label = snowball
            .get(index)
            .or_else(|| avalanche.get(index))
            .map(|p| p.month.to_string())
            .unwrap_or_default();

        csv.write_record([
            (index + 1).to_string(),
            label,
            amount(snowball.get(index)),
            amount(avalanche.get(index)),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)
}

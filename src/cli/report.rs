//! Read-only report commands

use crate::config::Settings;
use crate::error::PlanResult;
use crate::models::AppConfig;
use crate::reports::{DashboardReport, NetWorthReport, PaycheckReport};

pub fn handle_summary_command(snapshot: &AppConfig, settings: &Settings) -> PlanResult<()> {
    let report = DashboardReport::generate(snapshot, settings)?;
    print!("{}", report.format_terminal());
    Ok(())
}

pub fn handle_net_worth_command(snapshot: &AppConfig, settings: &Settings) -> PlanResult<()> {
    let report = NetWorthReport::generate(&snapshot.accounts, &settings.currency_symbol)?;
    print!("{}", report.format_terminal());
    Ok(())
}

pub fn handle_paycheck_command(snapshot: &AppConfig, settings: &Settings) -> PlanResult<()> {
    let report = PaycheckReport::generate(
        &snapshot.paycheck_info,
        settings.reconcile_tolerance,
        &settings.currency_symbol,
    )?;
    print!("{}", report.format_terminal());
    Ok(())
}

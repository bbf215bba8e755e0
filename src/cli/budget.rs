//! Budget command

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::PlanResult;
use crate::models::AppConfig;
use crate::reports::BudgetOverviewReport;
use crate::services::advance_all;
use crate::snapshot::save_snapshot;

#[derive(Args, Debug, Default)]
pub struct BudgetArgs {
    /// Show what each category carries into next month
    #[arg(short, long)]
    pub advance: bool,

    /// Write the advanced snapshot (next month, spending reset) to FILE
    #[arg(short, long, value_name = "FILE", requires = "advance")]
    pub output: Option<PathBuf>,
}

pub fn handle_budget_command(
    snapshot: &AppConfig,
    settings: &Settings,
    args: BudgetArgs,
) -> PlanResult<()> {
    let report = BudgetOverviewReport::generate(
        &snapshot.budget,
        snapshot.active_month,
        args.advance,
        &settings.currency_symbol,
    )?;
    print!("{}", report.format_terminal());

    if let Some(output) = args.output {
        let advanced = AppConfig {
            active_month: snapshot.active_month.next(),
            budget: advance_all(&snapshot.budget)?,
            ..snapshot.clone()
        };
        save_snapshot(&output, &advanced)?;
        println!();
        println!(
            "Advanced snapshot for {} written to {}",
            advanced.active_month,
            output.display()
        );
    }

    Ok(())
}

//! Debt payoff command

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::{PlanError, PlanResult};
use crate::export::{
    export_comparison_csv, export_payoff_schedule_csv, export_scenario_json, ScenarioExport,
};
use crate::models::{AppConfig, Money, Month, PayoffStrategy};
use crate::reports::{format_divergence, PayoffReport};
use crate::services::{compare_strategies, simulate};

#[derive(Args, Debug, Default)]
pub struct DebtsArgs {
    /// Payoff strategy: snowball or avalanche (default from settings)
    #[arg(short = 'm', long, value_parser = PayoffStrategy::parse)]
    pub strategy: Option<PayoffStrategy>,

    /// Extra monthly payment on top of the minimums, e.g. 150 or 150.00
    #[arg(short, long, value_parser = Money::parse, allow_hyphen_values = true)]
    pub extra: Option<Money>,

    /// First simulated month (YYYY-MM); defaults to the snapshot's active month
    #[arg(long, value_parser = Month::parse)]
    pub start: Option<Month>,

    /// Also run the other strategy and compare
    #[arg(short, long)]
    pub compare: bool,

    /// Write the month-by-month schedule to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write the scenario to a JSON file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

fn create_file(path: &Path) -> PlanResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| PlanError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Print the divergence message, then hand the error back
fn report_divergence(err: PlanError, settings: &Settings) -> PlanError {
    if let PlanError::SimulationDiverged {
        months,
        projected_balances,
    } = &err
    {
        let last = projected_balances.last().map(|p| (p.month, p.balance));
        print!("{}", format_divergence(*months, last, &settings.currency_symbol));
    }
    err
}

pub fn handle_debts_command(
    snapshot: &AppConfig,
    settings: &Settings,
    args: DebtsArgs,
) -> PlanResult<()> {
    let strategy = args.strategy.unwrap_or(settings.default_strategy);
    let extra = args.extra.unwrap_or(settings.default_extra_payment);
    let options = settings.simulation_options(args.start.unwrap_or(snapshot.active_month));

    let scenario = simulate(&snapshot.debts, strategy, extra, &options)
        .map_err(|e| report_divergence(e, settings))?;

    let comparison = if args.compare {
        Some(
            compare_strategies(&snapshot.debts, extra, &options)
                .map_err(|e| report_divergence(e, settings))?,
        )
    } else {
        None
    };

    if let Some(path) = &args.csv {
        let writer = create_file(path)?;
        match &comparison {
            Some(comparison) => export_comparison_csv(comparison, writer)?,
            None => export_payoff_schedule_csv(&scenario, writer)?,
        }
        tracing::info!(path = %path.display(), "wrote payoff schedule");
    }

    if let Some(path) = &args.json {
        let export = ScenarioExport::new(
            scenario.clone(),
            options.start_month,
            extra,
            snapshot.debts.len(),
        );
        let mut writer = create_file(path)?;
        export_scenario_json(&export, &mut writer)?;
        tracing::info!(path = %path.display(), "wrote payoff scenario");
    }

    let mut report = PayoffReport::new(&snapshot.debts, scenario, extra, &settings.currency_symbol);
    if let Some(comparison) = comparison {
        report = report.with_comparison(comparison);
    }
    print!("{}", report.format_terminal());

    Ok(())
}

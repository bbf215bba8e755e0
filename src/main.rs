use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use proserplan::cli::{
    handle_budget_command, handle_config_command, handle_debts_command, handle_defaults_command,
    handle_net_worth_command, handle_paycheck_command, handle_summary_command,
    load_snapshot_or_defaults, BudgetArgs, DebtsArgs, DefaultsArgs,
};
use proserplan::config::{ProserPaths, Settings};
use proserplan::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "proserplan",
    version,
    about = "Personal finance planning from the command line",
    long_about = "ProserPlan computes net worth, budget rollover, debt payoff \
                  projections and paycheck checks from a snapshot of your \
                  accounts, budget, debts and paycheck."
)]
struct Cli {
    /// Snapshot file (.json, .yaml or .yml); built-in starter data if omitted
    #[arg(short, long, global = true, env = "PROSERPLAN_SNAPSHOT", value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG is honoured too)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dashboard summary
    Summary,

    /// Net worth by account
    #[command(alias = "nw")]
    NetWorth,

    /// Budget categories and rollover
    Budget(BudgetArgs),

    /// Debt payoff projection
    Debts(DebtsArgs),

    /// Paycheck breakdown and monthly income
    Paycheck,

    /// Print the starter snapshot
    Defaults(DefaultsArgs),

    /// Show current configuration and paths
    Config {
        /// Save the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(if cli.verbose {
        "proserplan=debug"
    } else {
        "proserplan=warn"
    });

    let paths = ProserPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let snapshot_path = cli.snapshot.as_deref();
    let load = || load_snapshot_or_defaults(snapshot_path);

    match cli.command {
        Some(Commands::Summary) => handle_summary_command(&load()?, &settings)?,
        Some(Commands::NetWorth) => handle_net_worth_command(&load()?, &settings)?,
        Some(Commands::Budget(args)) => handle_budget_command(&load()?, &settings, args)?,
        Some(Commands::Debts(args)) => handle_debts_command(&load()?, &settings, args)?,
        Some(Commands::Paycheck) => handle_paycheck_command(&load()?, &settings)?,
        Some(Commands::Defaults(args)) => handle_defaults_command(args)?,
        Some(Commands::Config { init }) => {
            handle_config_command(&paths, &settings, snapshot_path, init)?
        }
        None => {
            handle_summary_command(&load()?, &settings)?;
            println!();
            println!("Run 'proserplan --help' for usage information.");
        }
    }

    Ok(())
}

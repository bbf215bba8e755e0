//! Starter snapshot and configuration commands

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::{ProserPaths, Settings};
use crate::error::PlanResult;
use crate::fixtures;
use crate::snapshot::{write_atomic, SnapshotFormat};

/// Snapshot output format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SnapshotFormatArg {
    #[default]
    Json,
    Yaml,
}

impl From<SnapshotFormatArg> for SnapshotFormat {
    fn from(arg: SnapshotFormatArg) -> Self {
        match arg {
            SnapshotFormatArg::Json => SnapshotFormat::Json,
            SnapshotFormatArg::Yaml => SnapshotFormat::Yaml,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct DefaultsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: SnapshotFormatArg,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Print or write the starter snapshot
pub fn handle_defaults_command(args: DefaultsArgs) -> PlanResult<()> {
    let contents = SnapshotFormat::from(args.format).encode(&fixtures::default_snapshot())?;

    match args.output {
        Some(path) => {
            write_atomic(&path, contents.as_bytes())?;
            println!("Starter snapshot written to {}", path.display());
        }
        None => {
            print!("{}", contents);
            if !contents.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

/// Show paths and settings; with `init`, save the current settings
pub fn handle_config_command(
    paths: &ProserPaths,
    settings: &Settings,
    snapshot: Option<&Path>,
    init: bool,
) -> PlanResult<()> {
    if init {
        settings.save(paths)?;
        println!("Settings written to {}", paths.settings_file().display());
        println!();
    }

    println!("ProserPlan Configuration");
    println!("========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    match snapshot {
        Some(path) => println!("Snapshot:         {}", path.display()),
        None => println!("Snapshot:         (built-in starter data)"),
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Default strategy:   {}", settings.default_strategy);
    println!(
        "  Default extra:      {}",
        settings
            .default_extra_payment
            .format_with_symbol(&settings.currency_symbol)
    );
    println!("  Max payoff months:  {}", settings.max_payoff_months);
    println!(
        "  Reconcile tolerance: {}",
        settings
            .reconcile_tolerance
            .format_with_symbol(&settings.currency_symbol)
    );
    println!("  Payment basis:      {:?}", settings.payment_basis);

    Ok(())
}

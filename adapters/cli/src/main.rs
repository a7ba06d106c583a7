#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Lawn Defence experience.

mod headless;
mod plan_transfer;
mod play;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lawn_defence_simulation::Config;
use tracing_subscriber::EnvFilter;

use crate::plan_transfer::PlacementPlan;

/// Lawn Defence: keep the zombies off your lawn.
#[derive(Debug, Parser)]
#[command(name = "lawn-defence", version, about)]
struct Cli {
    /// TOML file with `tick_period_ms`, `spawn_period_ms` and `seed`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Seed for lane selection and sun accrual, overriding the config file.
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Opens the game window (default).
    Play {
        /// Disables vertical sync.
        #[arg(long)]
        no_vsync: bool,
    },
    /// Runs the simulation without a window and prints a summary.
    Headless {
        /// Number of ticks to simulate.
        #[arg(long, default_value_t = 1_200)]
        ticks: u64,
        /// Placement plan in `lawn:v1:<payload>` form.
        #[arg(long)]
        plan: Option<String>,
        /// Prints the encoding of the placements that were applied.
        #[arg(long)]
        export_plan: bool,
    },
}

/// Entry point for the Lawn Defence command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.mode.unwrap_or(Mode::Play { no_vsync: false }) {
        Mode::Play { no_vsync } => play::run(config, !no_vsync),
        Mode::Headless {
            ticks,
            plan,
            export_plan,
        } => {
            let plan = match plan {
                Some(encoded) => {
                    PlacementPlan::decode(&encoded).context("failed to decode --plan")?
                }
                None => PlacementPlan::default(),
            };
            let summary = headless::run(config, ticks, &plan)?;
            println!("{summary}");
            if export_plan {
                println!("{}", summary.applied.encode()?);
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<Config>(&contents)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    Ok(config)
}

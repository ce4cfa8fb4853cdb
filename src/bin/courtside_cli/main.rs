// ABOUTME: Courtside CLI - runs insights, dashboard, and recent form analysis over a dataset file
// ABOUTME: Prints results as pretty JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly insight summary
//! courtside-cli insights --data athlete.json
//!
//! # Monthly insight summary for a named athlete
//! courtside-cli insights --data athlete.json --period monthly --owner jordan
//!
//! # Dashboard snapshot
//! courtside-cli dashboard --data athlete.json
//!
//! # Recent form report
//! courtside-cli form --data athlete.json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use courtside::config::AppConfig;
use courtside::models::Period;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "courtside-cli",
    about = "Courtside performance analytics CLI",
    long_about = "Generate insight summaries, dashboard snapshots, and recent form reports from a JSON dataset of games, training sessions, and goals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a period insight summary
    Insights {
        /// Dataset file (JSON)
        #[arg(long)]
        data: PathBuf,

        /// Reporting period: weekly or monthly
        #[arg(long, default_value = "weekly")]
        period: Period,

        /// Owner the records belong to
        #[arg(long, default_value = "athlete")]
        owner: String,
    },

    /// Show the dashboard snapshot
    Dashboard {
        /// Dataset file (JSON)
        #[arg(long)]
        data: PathBuf,

        /// Owner the records belong to
        #[arg(long, default_value = "athlete")]
        owner: String,
    },

    /// Show the recent form report
    Form {
        /// Dataset file (JSON)
        #[arg(long)]
        data: PathBuf,

        /// Owner the records belong to
        #[arg(long, default_value = "athlete")]
        owner: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init()?;

    info!("Courtside CLI");

    let output = match cli.command {
        Command::Insights {
            data,
            period,
            owner,
        } => commands::insights(&config, &data, &owner, period).await?,
        Command::Dashboard { data, owner } => commands::dashboard(&config, &data, &owner).await?,
        Command::Form { data, owner } => commands::form(&config, &data, &owner).await?,
    };

    println!("{output}");
    Ok(())
}

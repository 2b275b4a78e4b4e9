//! timer library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher; returns the process exit status.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<i32> {
    let done = match &cli.command {
        Commands::Start { .. } => return cli::commands::start::handle(&cli.command, cfg),
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg),
        Commands::Activities => cli::commands::activities::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    };
    done.map(|_| 0)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<i32> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(db) = &cli.db {
        cfg.database = Some(db.clone());
    }
    if let Some(record) = &cli.record {
        cfg.side_record = record.clone();
    }

    dispatch(&cli, &cfg)
}

//! footprint library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod ml;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Calc(_) => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Dataset { .. } => cli::commands::dataset::handle(&cli.command, cfg),
        Commands::Train { .. } => cli::commands::train::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

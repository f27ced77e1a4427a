//! rollcall library root.
//! Shared by the two binaries: `rollcall` (interactive entry) and
//! `rollcall-sheet` (TSV templates, import and export).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{EntryCli, SheetCli};
use config::Config;
use errors::AppResult;
use tracing::warn;

/// Entry point used by the `rollcall` binary
pub fn run_entry() -> AppResult<()> {
    let cli = EntryCli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    logging::init(&cfg);

    // Ctrl-C aborts the whole session with status 1.
    if let Err(e) = ctrlc::set_handler(|| {
        ui::messages::error("Entry cancelled by user");
        std::process::exit(1);
    }) {
        warn!(error = %e, "could not install the interrupt handler");
    }

    cli::commands::entry::handle(&cli, &cfg)
}

/// Entry point used by the `rollcall-sheet` binary
pub fn run_sheet() -> AppResult<()> {
    let cli = SheetCli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    logging::init(&cfg);

    cli::commands::sheet::handle(&cli, &cfg)
}

use crate::cli::parser::EntryCli;
use crate::config::Config;
use crate::core::{Collector, Console, Summary};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{header, success};
use tracing::info;

/// Handle the interactive session
///
/// Class info → attendance → behavior → detention → summary → optional export.
/// Cancellation (end of input) propagates as `AppError::Cancelled`.
pub fn handle(cli: &EntryCli, cfg: &Config) -> AppResult<()> {
    header("ROLLCALL - ATTENDANCE & BEHAVIOR ENTRY TOOL");

    let mut collector = Collector::new(Console::stdio(), cfg);
    let session = collector.run()?;

    info!(
        attendance = session.attendance().len(),
        behavior = session.behavior().len(),
        detention = session.detention().len(),
        "session collected"
    );

    let console = collector.console();
    console.say(Summary::of(&session).render())?;

    // Only a plain `y` exports; `yes` does not.
    if console
        .ask("\nExport to CSV? (y/n): ")?
        .eq_ignore_ascii_case("y")
    {
        ExportLogic::session(&session, cli.output.as_deref(), cfg);
    }

    success("Data entry completed successfully!");
    Ok(())
}

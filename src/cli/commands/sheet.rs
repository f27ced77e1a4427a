use crate::cli::parser::SheetCli;
use crate::config::Config;
use crate::core::{Console, render_sheet};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::import::{load_or_report, write_templates};
use crate::ui::messages::{header, info, success, warning};
use std::path::Path;

/// Handle `rollcall-sheet [FILEPATH]`
///
/// - no path → write the templates into the current directory, print usage
/// - path → load, print the table, offer CSV/JSON export
pub fn handle(cli: &SheetCli, cfg: &Config) -> AppResult<()> {
    let mut console = Console::stdio();

    match &cli.filepath {
        None => create_templates(cli.force, &mut console),
        Some(path) => load_and_export(path, cli.output.as_deref(), cfg, &mut console),
    }
}

fn create_templates<R, W>(force: bool, console: &mut Console<R, W>) -> AppResult<()>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    header("ROLLCALL - Spreadsheet Entry Tool");
    info("Creating templates...");

    write_templates(Path::new("."), force, console)?;

    console.say("\nUsage:")?;
    console.say("  1. Edit the created .tsv files with your data")?;
    console.say("  2. Run: rollcall-sheet attendance_template.tsv")?;
    console.say("  3. Or: rollcall-sheet behavior_template.tsv")?;
    console.say("  4. Or: rollcall-sheet detention_template.tsv")?;
    console.say("\nNote: Use TAB key to separate columns, not spaces!")?;
    Ok(())
}

fn load_and_export<R, W>(
    path: &Path,
    output: Option<&Path>,
    cfg: &Config,
    console: &mut Console<R, W>,
) -> AppResult<()>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    info(format!("Reading data from: {}", path.display()));

    let Some(sheet) = load_or_report(path) else {
        return Ok(());
    };

    if sheet.is_empty() {
        warning(format!("No records found in {}", path.display()));
        return Ok(());
    }

    console.say(render_sheet(&format!("Loaded {} records", sheet.len()), &sheet))?;

    console.say("\nExport options:")?;
    console.say("1. Export to CSV")?;
    console.say("2. Export to JSON")?;
    console.say("3. Skip export")?;

    match console.ask("\nSelect option (1-3): ")?.as_str() {
        "1" => {
            ExportLogic::sheet(&sheet, ExportFormat::Csv, output, cfg);
        }
        "2" => {
            ExportLogic::sheet(&sheet, ExportFormat::Json, output, cfg);
        }
        "3" => success("Skipped export"),
        other => warning(format!("Invalid option '{other}', nothing exported")),
    }

    Ok(())
}

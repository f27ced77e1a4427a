use clap::Parser;
use std::path::PathBuf;

/// Interactive attendance, behavior and detention entry
#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive entry of class attendance, behavior incidents and detentions, with CSV export",
    long_about = None
)]
pub struct EntryCli {
    /// Use this configuration file instead of ~/.rollcall/rollcall.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Export file (default: attendance_report_<timestamp>.csv in the output dir)
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Spreadsheet-style TSV import with CSV/JSON export
#[derive(Parser, Debug)]
#[command(
    name = "rollcall-sheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create TSV templates, or load a TSV file, show it as a table and export it to CSV or JSON",
    long_about = None
)]
pub struct SheetCli {
    /// Tab-separated file to load. Without it, the three templates are
    /// written into the current directory.
    #[arg(value_name = "FILEPATH")]
    pub filepath: Option<PathBuf>,

    /// Use this configuration file instead of ~/.rollcall/rollcall.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Export file (default: data_<timestamp>.<csv|json> in the output dir)
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite existing template files without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}

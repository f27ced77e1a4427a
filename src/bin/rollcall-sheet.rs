//! rollcall-sheet entrypoint (TSV templates, import and export).

use rollcall::run_sheet;

fn main() {
    println!();
    if let Err(e) = run_sheet() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

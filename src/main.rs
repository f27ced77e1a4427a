//! rollcall main entrypoint (interactive entry).

use rollcall::errors::AppError;
use rollcall::run_entry;
use rollcall::ui::messages::error;

fn main() {
    if let Err(e) = run_entry() {
        match e {
            AppError::Cancelled => {
                eprintln!();
                error(e);
            }
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

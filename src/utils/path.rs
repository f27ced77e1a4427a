//! Path utilities: expand ~ and build timestamped output names.

use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};
use tracing::warn;

const FALLBACK_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/<prefix>_<timestamp>.<ext>`, e.g. `./data_20241201_153000.json`.
///
/// An invalid strftime pattern falls back to `%Y%m%d_%H%M%S`.
pub fn timestamped_file(dir: &Path, prefix: &str, ext: &str, timestamp_format: &str) -> PathBuf {
    let valid = !StrftimeItems::new(timestamp_format).any(|item| matches!(item, Item::Error));
    let pattern = if valid {
        timestamp_format
    } else {
        warn!(timestamp_format, "invalid timestamp format, using default");
        FALLBACK_TIMESTAMP
    };

    let stamp = Local::now().format(pattern);
    dir.join(format!("{prefix}_{stamp}.{ext}"))
}

// src/export/fs_utils.rs

use crate::config::Config;
use crate::core::prompt::Console;
use crate::errors::{AppError, AppResult};
use crate::utils::path::timestamped_file;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Check whether a file may be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` is set → Ok
/// - file exists and `force == false` → ask the operator.
pub fn ensure_writable<R: BufRead, W: Write>(
    path: &Path,
    force: bool,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    console.say(format!("⚠️ The file '{}' already exists.", path.display()))?;

    if console.confirm("Overwrite? [y/N]: ")? {
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(format!(
            "'{}' already exists and was not overwritten",
            path.display()
        ))))
    }
}

/// Explicit output path, or `<output_dir>/<prefix>_<timestamp>.<ext>`.
pub(crate) fn resolve_output(explicit: Option<&Path>, cfg: &Config, prefix: &str, ext: &str) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => timestamped_file(&cfg.output_dir(), prefix, ext, &cfg.timestamp_format),
    }
}

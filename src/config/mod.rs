use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// User settings, read from `~/.rollcall/rollcall.conf` (YAML).
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory used for timestamped export files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Value stored when the attendance time is left blank
    #[serde(default = "default_time")]
    pub default_time: String,
    /// Multiplier for the behavior points default
    #[serde(default = "default_points_per_severity")]
    pub points_per_severity: i64,
    /// chrono format used in default export file names
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// tracing filter used when ROLLCALL_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_time() -> String {
    "--:--".to_string()
}
fn default_points_per_severity() -> i64 {
    5
}
fn default_timestamp_format() -> String {
    "%Y%m%d_%H%M%S".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_time: default_time(),
            points_per_severity: default_points_per_severity(),
            timestamp_format: default_timestamp_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Load the configuration from `custom` (if given) or from the standard
    /// location. A missing standard file yields the defaults; a missing
    /// custom file is an error, since the operator asked for it explicitly.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "configuration file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse the YAML file at `path`.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Output directory with `~/` expanded.
    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }
}

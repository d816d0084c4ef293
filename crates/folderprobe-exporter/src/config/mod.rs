//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use folderprobe_core::error::{ProbeError, Result};

pub use schema::{ExporterConfig, ExporterSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FOLDERPROBE_CONFIG";
/// Config file used when `FOLDERPROBE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "folderprobe.yaml";

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ProbeError::InvalidConfig(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ProbeError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, falling back to built-in defaults when the file does not exist.
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<ExporterConfig> {
    match fs::metadata(path) {
        Ok(_) => load_from_file(path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "config file not found, using defaults");
            Ok(ExporterConfig::default())
        }
        Err(e) => Err(ProbeError::InvalidConfig(format!(
            "stat config failed ({path}): {e}"
        ))),
    }
}

/// Config path from `FOLDERPROBE_CONFIG`, or [`DEFAULT_CONFIG_PATH`].
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

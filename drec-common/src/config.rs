//! Configuration loading and data directory resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Default HTTP port for the resource API
pub const DEFAULT_PORT: u16 = 5731;

/// Data directory resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `DREC_DATA_DIR` environment variable
/// 3. TOML config file (`data_dir` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("DREC_DATA_DIR") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config) = load_config_file() {
        if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
            return PathBuf::from(data_dir);
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_dir()
}

/// HTTP port resolution with the same priority order as the data directory:
/// CLI > `DREC_PORT` env > TOML `port` key > compiled default.
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Ok(port) = std::env::var("DREC_PORT") {
        if let Ok(port) = port.parse::<u16>() {
            return port;
        }
    }

    if let Ok(config) = load_config_file() {
        if let Some(port) = config.get("port").and_then(|v| v.as_integer()) {
            if let Ok(port) = u16::try_from(port) {
                return port;
            }
        }
    }

    DEFAULT_PORT
}

/// Create the data directory if it does not exist yet
pub fn ensure_data_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// SQLite database path within the data directory
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("dreamrecords.db")
}

/// Persisted client session (filter + draft) path within the data directory
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join("session.json")
}

/// Load and parse the platform config file, if present
fn load_config_file() -> Result<toml::Value> {
    let path = config_file_path()?;
    let content = std::fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Per-user config file path: `<config dir>/dreamrecords/config.toml`
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("dreamrecords").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// OS-dependent default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("dreamrecords"))
        .unwrap_or_else(|| PathBuf::from("./dreamrecords_data"))
}

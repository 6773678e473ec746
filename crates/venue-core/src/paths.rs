//! Filesystem locations for config and logs

use std::path::PathBuf;

use crate::constants::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Root config directory (~/.venues), falling back to the working directory
/// when no home directory can be determined
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default config file path
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Log directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

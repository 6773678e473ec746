//! Error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Precondition violations on the form list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Entry index does not exist
    #[error("entry index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures while loading configuration or reference catalogs
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::Config`]
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog file is not valid JSON
    #[error("invalid catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog parsed but contains no options
    #[error("region catalog is empty")]
    EmptyCatalog,

    /// Two regions share an id
    #[error("duplicate region id: {0}")]
    DuplicateRegion(String),

    /// A region has an empty id or name; the value is its position
    #[error("region {0} has a blank id or name")]
    BlankRegion(usize),
}

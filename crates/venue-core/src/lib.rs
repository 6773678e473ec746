//! Venues Core - Shared library for venue location entries
//!
//! This crate provides the core functionality for the Venues TUI:
//! - Location entry model and typed field updates
//! - Per-entry validation
//! - The form-list controller (edit, copy, append, save)
//! - Region and country reference catalogs
//! - Configuration and path resolution

pub mod config;
pub mod constants;
pub mod countries;
pub mod error;
pub mod form;
pub mod model;
pub mod paths;
pub mod regions;
pub mod validation;

// Re-exports for convenience
pub use config::Config;
pub use countries::{Country, CountryCatalog};
pub use error::{ConfigError, FormError};
pub use form::{FormList, SaveOutcome};
pub use model::{FieldName, FieldUpdate, FormEntry, RawValue, Region};
pub use regions::RegionCatalog;
pub use validation::{validate_entry, ErrorSet, FieldErrors};

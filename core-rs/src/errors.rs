//! Error types for the core addon registry

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonsError {
    /// A data file expected for a known series/edition is missing.
    /// Every supported pair ships one, so this is a packaging defect.
    #[error("Resource not found: {resource} (in {location})")]
    ResourceNotFound { resource: String, location: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// License requested for an addon that is not core for the series.
    /// Callers must check `is_core_addon` first; this is a contract violation.
    #[error("{addon} is not a core addon of Odoo {series}")]
    NotCoreAddon { addon: String, series: String },

    #[error("Invalid Odoo series: {0}")]
    InvalidSeries(String),

    #[error("Invalid Odoo edition: {0}")]
    InvalidEdition(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AddonsError>;

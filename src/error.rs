use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Roster error: {0}")]
    RosterError(String),
    /// The team logged no billable hours, so there is nothing to proportion.
    #[error("Team has no billable hours; payouts cannot be allocated")]
    EmptyWorkload,
    /// The management dividend has nobody to be paid to.
    #[error("Team has no management workers to receive the dividend")]
    NoManagementWorkers,
    /// Net payouts plus donations do not reconstruct the post-fee team sum.
    #[error(
        "There has been a math error: payouts and donations total {actual}, expected {expected} (tolerance {tolerance})"
    )]
    ComputationIntegrity {
        expected: Decimal,
        actual: Decimal,
        tolerance: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, PayoutError>;

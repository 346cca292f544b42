use thiserror::Error;

/// Errors produced while scheduling dues or moving member data in and out.
#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Invalid cycle configuration: cycle length must be positive, got {cycle_length_days}")]
    InvalidCycleConfiguration { cycle_length_days: u32 },
    #[error("Member {member} has neither a last due date nor an enrollment date")]
    MissingAnchor { member: u32 },
    #[error("Date arithmetic out of range")]
    DateOutOfRange,
    #[error("Unknown member: {0}")]
    UnknownMember(u32),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BillingError>;

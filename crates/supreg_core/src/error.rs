use thiserror::Error;

/// Maximum address length, in characters.
pub const MAX_ADDRESS_LEN: usize = 40;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("required field '{field}' must not be empty")]
    MissingRequiredField { field: &'static str },

    #[error("field '{field}' must contain only letters and spaces")]
    InvalidNameFormat { field: &'static str },

    #[error("national id must be exactly 11 numeric digits")]
    InvalidNationalId,

    #[error("postal code must be exactly 8 numeric digits")]
    InvalidPostalCode,

    #[error("address must be at most {MAX_ADDRESS_LEN} characters (got {len})")]
    AddressTooLong { len: usize },

    #[error("national id is already registered")]
    DuplicateNationalId,

    #[error("store failure: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

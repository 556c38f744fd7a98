use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressLookupError {
    #[error("CEP must have exactly 8 digits, got {0:?}")]
    InvalidCep(String),

    #[error("CEP not found: {0}")]
    NotFound(String),

    #[error("Failed to reach address service: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for AddressLookupError {
    fn from(e: reqwest::Error) -> Self {
        AddressLookupError::Connection(e.to_string())
    }
}

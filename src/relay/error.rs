use crate::relay::store::StoreError;
use thiserror::Error;

pub const MISSING_CREDENTIALS: &str = "missing device_id or device_secret";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("device not found")]
    DeviceNotFound,

    #[error("incorrect secret")]
    Unauthorized,

    /// Any failure talking to the entity store, whichever call it came from
    #[error("{0}")]
    Remote(String),
}

impl RelayError {
    pub fn missing_credentials() -> Self {
        RelayError::Validation(MISSING_CREDENTIALS.to_string())
    }

    /// Label used for the submission outcome metric
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::Validation(_) => "invalid",
            RelayError::DeviceNotFound => "unknown_device",
            RelayError::Unauthorized => "unauthorized",
            RelayError::Remote(_) => "remote_error",
        }
    }
}

impl From<StoreError> for RelayError {
    fn from(err: StoreError) -> Self {
        RelayError::Remote(err.to_string())
    }
}

pub type RelayResult<T> = Result<T, RelayError>;

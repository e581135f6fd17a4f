//! Error type shared by the Rust API and the FFI layer.

use crate::ffi::types::BridgeStatus;
use std::ffi::NulError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("null pointer passed as `{0}`")]
    NullPointer(&'static str),

    #[error("string contains an interior nul byte at position {0}")]
    InteriorNul(usize),

    #[error("invalid UTF-8 in `{0}`")]
    InvalidUtf8(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging subscriber already installed")]
    LoggingInitialized,

    #[error("boundary call returned {0:?}")]
    Status(BridgeStatus),
}

impl From<NulError> for BridgeError {
    fn from(e: NulError) -> Self {
        BridgeError::InteriorNul(e.nul_position())
    }
}

impl BridgeError {
    /// Status code reported across the boundary for this error.
    pub fn status(&self) -> BridgeStatus {
        match self {
            BridgeError::NullPointer(_) => BridgeStatus::NullPointer,
            BridgeError::InteriorNul(_) => BridgeStatus::InvalidArgument,
            BridgeError::InvalidUtf8(_) => BridgeStatus::InvalidUtf8,
            BridgeError::Io(_) => BridgeStatus::IoError,
            BridgeError::LoggingInitialized => BridgeStatus::AlreadyInitialized,
            BridgeError::Status(status) => *status,
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

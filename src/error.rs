//! Error types for the ordering client

use crate::checkout::{CheckoutError, SubmitError};
use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for ordering client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ordering client
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("Order submission failed: {0}")]
    Submission(#[from] SubmitError),

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Cannot check out with an empty cart")]
    EmptyCart,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Required environment variables are absent
    #[error("Missing env vars: {}", .0.join(", "))]
    Config(Vec<String>),

    /// Caller supplied a tier outside the known set
    #[error("Invalid or missing 'tier'. Must be one of: early-bird, regular, day-of.")]
    InvalidTier,

    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),
}

impl PaymentError {
    /// Whether the caller can fix this by changing their input
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::InvalidTier)
    }
}

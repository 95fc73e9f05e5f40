//! Shared Error Types
//!
//! Error types used across the client. None of them ever reaches a screen
//! boundary as an `Err`: transport errors are absorbed by the request helper
//! and form errors become the status line of the screen that raised them.
//!
//! # Error Categories
//!
//! - `ApiError` - transport, status and decoding failures of a backend call
//! - `FormError` - validation and authorization failures shown to the user
//!
//! # Usage
//!
//! ```rust
//! use adoption_center::shared::error::FormError;
//!
//! let error = FormError::PasswordMismatch;
//! assert_eq!(error.to_string(), "Passwords don't match");
//! ```
use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol error raised by the HTTP client
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status. The URL is not kept since
    /// credential checks carry the password in the path.
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a new status error
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// User-visible validation and authorization failures.
///
/// The `Display` text of each variant is exactly the message shown on screen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Required fields not filled in")]
    RequiredFields,

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Username is reserved")]
    ReservedUsername,

    #[error("Username taken")]
    UsernameTaken,

    /// Unknown username and wrong password are deliberately indistinguishable
    #[error("Username or password is incorrect")]
    BadCredentials,

    #[error("Please fill in all fields")]
    IncompleteDonation,

    #[error("Card number should be 16 digits")]
    CardLength,

    #[error("Please enter a valid credit card number")]
    InvalidCard,

    #[error("Only the administrator can do that")]
    AdminOnly,
}

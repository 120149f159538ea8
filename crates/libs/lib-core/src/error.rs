//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] shared by the query layer,
//! the fetch implementations and the view models.
//!
//! ## Design
//!
//! - **Single Error Type**: every fetch resolves to `Result<T, AppError>`
//! - **Cloneable**: one failed request is handed to every caller that joined it,
//!   and it is kept in the query cache until the next fetch
//! - **Display vs. detail**: `Display` carries the full detail for logs,
//!   [`AppError::user_message`] is what the page shows
//!
//! ## Error Categories
//!
//! 1. **Transport**
//!    - [`Network`](AppError::Network): request never produced a response
//!    - [`Status`](AppError::Status): non-success HTTP status
//! 2. **Payload**
//!    - [`Decoding`](AppError::Decoding): body did not match the expected shape
//!    - [`NotFound`](AppError::NotFound): upstream knows no such coin
//! 3. **Startup**
//!    - [`Config`](AppError::Config): invalid configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_id(id: &str) -> Result<&str> {
//!     if id.is_empty() {
//!         return Err(AppError::NotFound("empty coin id".to_string()));
//!     }
//!     Ok(id)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request failed before any response arrived (offline, DNS, CORS).
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded into the expected type.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Requested coin does not exist upstream.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Build the error for a non-success response, mapping 404 to [`AppError::NotFound`].
    pub fn from_status(status: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        if status == 404 {
            AppError::NotFound(url)
        } else {
            AppError::Status { status, url }
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Transport and payload details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(_) => "This coin could not be found.".to_string(),
            AppError::Network(_) => "Could not reach the price service. Check your connection.".to_string(),
            AppError::Status { status, .. } if *status == 429 => {
                "The price service is rate limiting requests. Try again shortly.".to_string()
            }
            AppError::Status { .. } => "The price service is temporarily unavailable.".to_string(),
            AppError::Decoding(_) => "The price service returned data we could not read.".to_string(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

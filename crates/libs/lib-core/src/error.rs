//! # Centralized Error Handling
//!
//! Error types used across the core. Follows the `thiserror` pattern.
//!
//! ## Design
//!
//! - **[`WalletError`]**: Everything that can go wrong during a wallet handshake
//!   or while talking to a connector backend.
//! - **[`ContentError`]**: Validation failures of the simulated content workflows.
//!
//! Neither type ever escapes to the UI as a raised fault. The wallet manager
//! absorbs every [`WalletError`] at its boundary, logs it and turns it into a
//! notification using [`WalletError::title`] and [`WalletError::user_message`].
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{Result, WalletError};
//!
//! fn first_account(accounts: Vec<String>) -> Result<String> {
//!     accounts
//!         .into_iter()
//!         .next()
//!         .ok_or_else(|| WalletError::HandshakeRejected("No accounts returned".to_string()))
//! }
//!
//! assert!(first_account(vec![]).is_err());
//! ```

use std::time::Duration;
use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet connection error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// No injected provider (browser extension) in the host environment.
    #[error("No injected wallet provider found")]
    ProviderUnavailable,

    /// The user or the remote peer declined the connection.
    #[error("Connection rejected: {0}")]
    HandshakeRejected(String),

    /// Relay pairing did not complete in time.
    #[error("Wallet pairing timed out after {}s", .0.as_secs())]
    SessionTimeout(Duration),

    /// Backend-internal failure (network, malformed response).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Chain identifier that is neither hex nor decimal.
    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),

    /// Durable storage refused a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WalletError {
    /// Notification title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            WalletError::ProviderUnavailable => "Wallet not found",
            WalletError::SessionTimeout(_) => "Connection Timed Out",
            _ => "Connection Failed",
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Rejections carry the backend's own wording; internal failures collapse to
    /// a generic message.
    pub fn user_message(&self) -> String {
        match self {
            WalletError::ProviderUnavailable => {
                "Please install a browser wallet extension such as MetaMask to connect".to_string()
            }
            WalletError::HandshakeRejected(msg) => msg.clone(),
            WalletError::SessionTimeout(_) => {
                "The wallet did not approve the session in time. Please try again.".to_string()
            }
            WalletError::Backend(_)
            | WalletError::InvalidChainId(_)
            | WalletError::Storage(_)
            | WalletError::Config(_) => "Failed to connect wallet".to_string(),
        }
    }
}

/// Content workflow validation error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Title Required")]
    TitleRequired,

    #[error("Text Required")]
    TextRequired,

    #[error("File Required")]
    FileRequired,

    #[error("File Too Large")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
}

impl ContentError {
    /// Description shown under the toast title.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ContentError::TitleRequired => "Please provide a title for your content.".to_string(),
            ContentError::TextRequired => format!("Please enter some text content to {}.", action),
            ContentError::FileRequired => format!("Please select a file to {}.", action),
            ContentError::FileTooLarge { limit_bytes, .. } => {
                format!("Files up to {}MB are supported.", limit_bytes / (1024 * 1024))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_keeps_backend_message() {
        let err = WalletError::HandshakeRejected("User rejected the request.".to_string());
        assert_eq!(err.title(), "Connection Failed");
        assert_eq!(err.user_message(), "User rejected the request.");
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let err = WalletError::Backend("socket hang up".to_string());
        assert_eq!(err.user_message(), "Failed to connect wallet");
        assert_eq!(err.to_string(), "Backend error: socket hang up");
    }

    #[test]
    fn test_timeout_display() {
        let err = WalletError::SessionTimeout(Duration::from_secs(120));
        assert_eq!(err.to_string(), "Wallet pairing timed out after 120s");
        assert_eq!(err.title(), "Connection Timed Out");
    }

    #[test]
    fn test_content_messages() {
        assert_eq!(ContentError::TextRequired.user_message("register"), "Please enter some text content to register.");
        assert_eq!(ContentError::FileRequired.user_message("verify"), "Please select a file to verify.");
        let too_large = ContentError::FileTooLarge { size_bytes: 60 * 1024 * 1024, limit_bytes: 50 * 1024 * 1024 };
        assert_eq!(too_large.user_message("upload"), "Files up to 50MB are supported.");
    }
}

//! Error taxonomy for the minting operation.
//!
//! Every failure is handled at the boundary of the single mint operation and
//! converted to an HTTP status/body pair by the embedding layer. Nothing is
//! retried internally: signing is a deterministic local computation, so any
//! failure is either caller-correctable input or an operator-side defect.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the mint operation and configuration loading.
#[derive(Error, Debug)]
pub enum MintError {
    /// Required identity fields are missing or empty. Caller-correctable.
    #[error("userId and email are required")]
    InvalidInput,

    /// Signing key material is absent or a required variable is unset.
    /// Operator-caused, never user-triggered.
    #[error("{0}")]
    Configuration(String),

    /// The signing primitive rejected the key or claims.
    #[error("{0}")]
    Signing(String),

    /// Anything else. The public body never carries the wrapped detail.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MintError {
    /// Shorthand for a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Shorthand for a signing error.
    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }

    /// HTTP status the boundary reports for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Configuration(_) | Self::Signing(_) | Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code, also used as the metrics label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => MINT_INVALID_INPUT,
            Self::Configuration(_) => MINT_CONFIGURATION,
            Self::Signing(_) => MINT_SIGNING,
            Self::Internal(_) => MINT_INTERNAL,
        }
    }

    /// Message safe to relay in the response body.
    ///
    /// Internal errors collapse to a generic message so their detail stays
    /// out of responses.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for MintError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        MintError::Signing(err.to_string())
    }
}

/// JSON body the boundary relays for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl From<&MintError> for ErrorResponse {
    fn from(err: &MintError) -> Self {
        Self {
            error: err.public_message(),
        }
    }
}

// Error codes for boundary payloads and metrics labels
/// Missing required identity fields.
pub const MINT_INVALID_INPUT: &str = "MINT_INVALID_INPUT";
/// Signing key absent or unusable.
pub const MINT_CONFIGURATION: &str = "MINT_CONFIGURATION";
/// Signing primitive rejected the key or claims.
pub const MINT_SIGNING: &str = "MINT_SIGNING";
/// Unexpected failure.
pub const MINT_INTERNAL: &str = "MINT_INTERNAL";

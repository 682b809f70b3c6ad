//! Identity input for the mint operation.

use crate::error::MintError;
use serde::{Deserialize, Serialize};

/// Principal identity supplied per request by the HTTP boundary.
///
/// Deserializes from the camelCase request body (`userId`, `email`,
/// `firstName`, `lastName`). Missing required fields deserialize to empty
/// strings, so absent and blank values fail validation identically.
/// Transient: supplied per request and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInput {
    /// Stable user identifier; becomes the `sub` claim.
    #[serde(default)]
    pub user_id: String,
    /// Primary email address; carried verbatim as a claim.
    #[serde(default)]
    pub email: String,
    /// Given name, omitted from the token when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name, omitted from the token when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl IdentityInput {
    /// Create an identity with the required fields.
    #[must_use]
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
        }
    }

    /// Attach optional name fields.
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Check the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::InvalidInput`] when `user_id` or `email` is
    /// empty.
    pub fn validate(&self) -> Result<(), MintError> {
        if self.user_id.is_empty() || self.email.is_empty() {
            return Err(MintError::InvalidInput);
        }
        Ok(())
    }
}

use crate::identity::IdentityInput;
use serde::{Deserialize, Serialize};

/// Claims set carried by an issued SSO handoff token.
///
/// Derived entirely from the identity input and the capture time; constructed
/// fresh per request and never persisted. `aud` is a single string, the wire
/// format the consuming HR platform expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    // Standard registered claims
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub jti: String,

    // Identity claims
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Claims {
    /// Build the claims set for one issuance.
    ///
    /// `issued_at` is the Unix time captured once by the caller, so `iat`,
    /// `nbf` and the jti derivation all observe the same instant.
    /// `exp` is always `issued_at + ttl_seconds`.
    #[must_use]
    pub fn new(
        issuer: String,
        audience: String,
        identity: &IdentityInput,
        issued_at: i64,
        ttl_seconds: i64,
        jti: String,
    ) -> Self {
        Claims {
            iss: issuer,
            aud: audience,
            sub: identity.user_id.clone(),
            exp: issued_at + ttl_seconds,
            iat: issued_at,
            nbf: issued_at,
            jti,
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        self.exp < now
    }

    pub fn is_valid_at(&self, timestamp: i64) -> bool {
        timestamp >= self.nbf && timestamp < self.exp
    }
}

//! The token minting operation.
//!
//! One-shot and stateless: validate the identity, capture the current time,
//! derive a jti, build the claims set, sign with the configured RSA key.
//! Signing is a bounded local CPU computation with no suspension points, so
//! the whole operation is synchronous and needs no coordination between
//! concurrent callers.

use crate::config::Config;
use crate::error::MintError;
use crate::identity::IdentityInput;
use crate::jwt::{jti, Claims, JwtSerializer};
use crate::metrics;
use jsonwebtoken::EncodingKey;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// Fixed validity window for issued tokens: two months.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24 * 30 * 2;

/// A freshly issued token and its validity duration in seconds.
///
/// Serializes to the `{"token": ..., "expiresIn": ...}` body the boundary
/// returns on success. The minter does not retain issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintedToken {
    /// Compact three-part JWT.
    pub token: String,
    /// Seconds until expiry, always [`TOKEN_TTL_SECONDS`].
    pub expires_in: i64,
}

/// Issues signed SSO handoff tokens from a process-wide signing
/// configuration.
///
/// Stateless aside from the immutable [`Config`]; a single instance may be
/// shared across threads without coordination.
pub struct TokenMinter {
    config: Config,
    serializer: JwtSerializer,
}

impl TokenMinter {
    /// Create a minter over the given signing configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            serializer: JwtSerializer::rs256(),
        }
    }

    /// Mint a signed token for the given identity.
    ///
    /// # Errors
    ///
    /// - [`MintError::InvalidInput`] when `user_id` or `email` is empty.
    /// - [`MintError::Configuration`] when the configured key is blank.
    /// - [`MintError::Signing`] when the key PEM is unusable or the encoder
    ///   rejects it.
    ///
    /// No retries: any failure is caller-correctable input or an operator
    /// defect, never a transient condition.
    pub fn mint(&self, identity: &IdentityInput) -> Result<MintedToken, MintError> {
        let started = Instant::now();
        let result = self.mint_inner(identity);

        match &result {
            Ok(_) => {
                metrics::record_token_issued("RS256");
                metrics::record_mint_latency("success", started.elapsed().as_secs_f64());
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "SSO token mint failed");
                metrics::record_mint_failure(err.kind());
                metrics::record_mint_latency("failure", started.elapsed().as_secs_f64());
            }
        }

        result
    }

    fn mint_inner(&self, identity: &IdentityInput) -> Result<MintedToken, MintError> {
        identity.validate()?;

        let pem = self.config.private_key.expose_secret();
        if pem.trim().is_empty() {
            return Err(MintError::configuration("SSO private key is not configured"));
        }

        let now = chrono::Utc::now().timestamp();
        let jti = jti::generate(&identity.user_id, now);
        let claims = Claims::new(
            self.config.issuer.clone(),
            self.config.audience.clone(),
            identity,
            now,
            TOKEN_TTL_SECONDS,
            jti,
        );

        let encoding_key =
            EncodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| MintError::signing(e.to_string()))?;
        let token = self
            .serializer
            .serialize(&claims, &encoding_key, Some(&self.config.key_id))?;

        info!(
            user_id = %identity.user_id,
            jti = %claims.jti,
            key_id = %self.config.key_id,
            "issued SSO handoff token"
        );

        Ok(MintedToken {
            token,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str = include_str!("../tests/data/rsa_test_key.pem");

    fn test_minter() -> TokenMinter {
        TokenMinter::new(Config::new(
            "https://sso.example.test",
            "hr-platform",
            "key-1",
            TEST_PRIVATE_KEY,
        ))
    }

    #[test]
    fn test_mint_returns_token_and_ttl() {
        let minted = test_minter()
            .mint(&IdentityInput::new("u1", "a@b.com"))
            .unwrap();

        assert_eq!(minted.expires_in, 5_184_000);
        assert_eq!(minted.token.split('.').count(), 3);
    }

    #[test]
    fn test_mint_rejects_empty_identity() {
        let err = test_minter().mint(&IdentityInput::default()).unwrap_err();
        assert!(matches!(err, MintError::InvalidInput));
    }

    #[test]
    fn test_mint_with_blank_key_is_configuration_error() {
        let minter = TokenMinter::new(Config::new("iss", "aud", "kid", "  "));
        let err = minter.mint(&IdentityInput::new("u1", "a@b.com")).unwrap_err();

        assert!(matches!(err, MintError::Configuration(_)));
        assert_eq!(err.to_string(), "SSO private key is not configured");
    }

    #[test]
    fn test_mint_with_malformed_pem_is_signing_error() {
        let minter = TokenMinter::new(Config::new("iss", "aud", "kid", "not a pem"));
        let err = minter.mint(&IdentityInput::new("u1", "a@b.com")).unwrap_err();

        assert!(matches!(err, MintError::Signing(_)));
    }

    #[test]
    fn test_minted_token_serializes_camel_case() {
        let minted = MintedToken {
            token: "a.b.c".to_string(),
            expires_in: TOKEN_TTL_SECONDS,
        };

        let json = serde_json::to_value(&minted).unwrap();
        assert_eq!(json["token"], "a.b.c");
        assert_eq!(json["expiresIn"], 5_184_000);
    }
}

use crate::error::MintError;
use crate::jwt::claims::Claims;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Compact JWT encoding and decoding with a fixed algorithm.
pub struct JwtSerializer {
    algorithm: Algorithm,
}

impl JwtSerializer {
    pub const fn new(algorithm: Algorithm) -> Self {
        JwtSerializer { algorithm }
    }

    /// RS256 serializer, the algorithm used for SSO handoff tokens.
    #[must_use]
    pub const fn rs256() -> Self {
        Self::new(Algorithm::RS256)
    }

    /// Encode claims into a compact three-part token.
    ///
    /// The header carries the algorithm and, when given, the `kid` key
    /// identifier.
    pub fn serialize(
        &self,
        claims: &Claims,
        key: &EncodingKey,
        key_id: Option<&str>,
    ) -> Result<String, MintError> {
        let mut header = Header::new(self.algorithm);
        if let Some(kid) = key_id {
            header.kid = Some(kid.to_string());
        }

        encode(&header, claims, key).map_err(|e| MintError::Signing(e.to_string()))
    }

    /// Decode and verify a token: signature, `exp`, `nbf` and audience.
    pub fn deserialize(
        &self,
        token: &str,
        key: &DecodingKey,
        audience: &str,
    ) -> Result<Claims, MintError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_audience(&[audience]);
        validation.validate_nbf = true;

        let token_data =
            decode::<Claims>(token, key, &validation).map_err(|e| MintError::Signing(e.to_string()))?;

        Ok(token_data.claims)
    }

    /// Decode the payload without verifying the signature.
    ///
    /// Inspection tooling only; never a substitute for [`Self::deserialize`].
    pub fn deserialize_unverified(&self, token: &str) -> Result<Claims, MintError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(MintError::Signing("Invalid token format".to_string()));
        }

        let payload = base64::Engine::decode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            parts[1],
        )
        .map_err(|e| MintError::Signing(e.to_string()))?;

        serde_json::from_slice(&payload).map_err(|e| MintError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityInput;

    const TEST_PRIVATE_KEY: &str = include_str!("../../tests/data/rsa_test_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("../../tests/data/rsa_test_key.pub.pem");

    fn test_claims() -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims::new(
            "https://sso.example.test".to_string(),
            "hr-platform".to_string(),
            &IdentityInput::new("user-123", "user@example.test"),
            now,
            3600,
            "test-jti".to_string(),
        )
    }

    #[test]
    fn test_round_trip_rs256() {
        let serializer = JwtSerializer::rs256();
        let encoding_key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let decoding_key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();

        let claims = test_claims();
        let token = serializer
            .serialize(&claims, &encoding_key, Some("key-1"))
            .unwrap();
        let decoded = serializer
            .deserialize(&token, &decoding_key, "hr-platform")
            .unwrap();

        assert_eq!(claims, decoded);
    }

    #[test]
    fn test_header_carries_kid() {
        let serializer = JwtSerializer::rs256();
        let encoding_key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY.as_bytes()).unwrap();

        let token = serializer
            .serialize(&test_claims(), &encoding_key, Some("key-1"))
            .unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some("key-1"));
    }

    #[test]
    fn test_audience_mismatch_rejected() {
        let serializer = JwtSerializer::rs256();
        let encoding_key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let decoding_key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();

        let token = serializer
            .serialize(&test_claims(), &encoding_key, None)
            .unwrap();

        assert!(serializer
            .deserialize(&token, &decoding_key, "some-other-audience")
            .is_err());
    }

    #[test]
    fn test_unverified_decode_reads_payload() {
        let serializer = JwtSerializer::rs256();
        let encoding_key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY.as_bytes()).unwrap();

        let claims = test_claims();
        let token = serializer
            .serialize(&claims, &encoding_key, Some("key-1"))
            .unwrap();

        let decoded = serializer.deserialize_unverified(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_unverified_decode_rejects_malformed_token() {
        let serializer = JwtSerializer::rs256();
        assert!(serializer.deserialize_unverified("not-a-jwt").is_err());
        assert!(serializer.deserialize_unverified("a.%%%.c").is_err());
    }
}

//! Unique token id (jti) generation.
//!
//! The jti is the hex-encoded SHA-256 digest of
//! `"<user_id>-<issued_at>-<random>"` with a fresh random component per
//! call. Best-effort uniqueness: collision probability is negligible but not
//! formally zero, so the jti is not a cryptographic commitment.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Generate a jti for one issuance.
///
/// `issued_at` is the same capture of Unix time that becomes the `iat`
/// claim. Randomness comes from [`rand::thread_rng`], a CSPRNG.
#[must_use]
pub fn generate(user_id: &str, issued_at: i64) -> String {
    let entropy: f64 = rand::thread_rng().gen();
    let digest = Sha256::digest(format!("{user_id}-{issued_at}-{entropy}").as_bytes());
    hex::encode(digest)
}

//! SSO token minting library.
//!
//! Issues RS256-signed JWTs for single-sign-on handoff to an external HR
//! platform: validates a principal identity, builds the claims set, signs it
//! with the configured RSA private key, and returns the compact token plus
//! its validity duration. The HTTP layer embedding this crate parses request
//! bodies into [`IdentityInput`], calls [`TokenMinter::mint`], and relays the
//! outcome as an HTTP response using [`MintError::status_code`] and
//! [`ErrorResponse`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod identity;
pub mod jwt;
pub mod metrics;
pub mod minter;
pub mod telemetry;

// Re-exports for convenience
pub use config::Config;
pub use error::{ErrorResponse, MintError};
pub use identity::IdentityInput;
pub use minter::{MintedToken, TokenMinter, TOKEN_TTL_SECONDS};

//! Claims construction, jti generation, and compact JWT serialization.

pub mod claims;
pub mod jti;
pub mod serializer;

pub use claims::Claims;
pub use serializer::JwtSerializer;

//! Session authentication
//!
//! HS256 session tokens carried in a cookie, decoded by a non-rejecting
//! middleware. Handlers decide for themselves whether identity is required.

pub mod jwt;
pub mod session;

pub use jwt::{JwtCodec, SessionClaims};
pub use session::{session_middleware, SessionState};

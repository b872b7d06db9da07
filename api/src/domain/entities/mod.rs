//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod session;
pub mod store;
pub mod user;

pub use session::{
    AuthorizationRequest, FavoriteOutcome, GoogleLogin, SessionToken, SignupOutcome,
};
pub use store::{Store, StoreId};
pub use user::{is_valid_email, User, UserCredentials, UserId};

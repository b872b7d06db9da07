//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::auth::SessionClaims;
use crate::domain::entities::{Store, User, UserCredentials};
use crate::entity::{stores, users};

/// A valid user; age 52 is stored as the 50 band
pub fn test_user() -> User {
    User::new("natori", "test@example.com", 52, -0.2, 0.3).unwrap()
}

pub fn test_credentials() -> UserCredentials {
    UserCredentials::new("test@example.com").unwrap()
}

pub fn test_store() -> Store {
    test_store_with_id("ChIJtest")
}

pub fn test_store_with_id(id: &str) -> Store {
    Store::new(
        id,
        format!("Store {}", id),
        "Monday: 9:00 AM – 5:00 PM",
        "PRICE_LEVEL_MODERATE",
        "35.681236",
        "139.767125",
    )
    .unwrap()
}

pub fn test_user_model(id: i32, email: &str) -> users::Model {
    let now = Utc::now().fixed_offset();
    users::Model {
        id,
        name: "natori".to_string(),
        email: email.to_string(),
        age: 50,
        sex: -0.2,
        gender: 0.3,
        created_at: Some(now),
        updated_at: Some(now),
    }
}

pub fn test_store_model(id: &str) -> stores::Model {
    stores::Model {
        id: id.to_string(),
        name: format!("Store {}", id),
        regular_opening_hours: "Monday: 9:00 AM – 5:00 PM".to_string(),
        price_level: "PRICE_LEVEL_MODERATE".to_string(),
        latitude: "35.681236".to_string(),
        longitude: "139.767125".to_string(),
        created_at: Some(Utc::now().fixed_offset()),
    }
}

/// Claims of a pending signup for `email`
pub fn claims_for(email: &str) -> SessionClaims {
    let now = Utc::now().timestamp();
    SessionClaims {
        sub: None,
        email: email.to_string(),
        iat: now,
        exp: now + 600,
    }
}

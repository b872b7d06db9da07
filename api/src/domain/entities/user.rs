//! User domain entity
//!
//! A registered user of the store map. Profile attributes are normalised
//! on construction: age is stored as a decade band and sex/gender as a
//! continuous scale from -1.0 (male) to 1.0 (female), 0 meaning neutral or
//! no answer.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationErrors;

/// Every age at or above this value is stored as this band
pub const AGE_CEILING: i32 = 60;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i32);

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(UserId)
    }
}

/// A validated user profile
///
/// Only obtainable through [`User::new`], so every instance satisfies the
/// email, age and scale invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
    age: i32,
    sex: f32,
    gender: f32,
}

impl User {
    /// Validate and normalise a new user
    ///
    /// Reports every violation at once. On success the age is banded and
    /// sex/gender are saturated into [-1.0, 1.0].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        sex: f32,
        gender: f32,
    ) -> Result<Self, ValidationErrors> {
        let email = email.into();

        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_email(&email) {
            errors.push(e);
        }
        errors.check(age < 0, "age must not be negative");

        errors.into_result(|| Self {
            id: None,
            name: name.into(),
            email,
            age: band_age(age),
            sex: clamp_scale(sex),
            gender: clamp_scale(gender),
        })
    }

    /// Rebuild a user from an already-validated persisted row
    pub(crate) fn restore(
        id: UserId,
        name: String,
        email: String,
        age: i32,
        sex: f32,
        gender: f32,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            age,
            sex,
            gender,
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Decade band, e.g. 50 for anyone aged 50-59
    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn sex(&self) -> f32 {
        self.sex
    }

    pub fn gender(&self) -> f32 {
        self.gender
    }
}

/// Lookup shape used for logins, distinct from the full profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    email: String,
}

impl UserCredentials {
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationErrors> {
        let email = email.into();
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_email(&email) {
            errors.push(e);
        }
        errors.into_result(|| Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(format!("'{}' is not a valid email address", email))
    }
}

/// Round down to the decade, capped at [`AGE_CEILING`]
///
/// Negative ages are rejected before banding.
pub fn band_age(age: i32) -> i32 {
    if age >= AGE_CEILING {
        AGE_CEILING
    } else {
        (age / 10) * 10
    }
}

pub fn clamp_scale(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

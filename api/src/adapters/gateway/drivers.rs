//! Driver traits
//!
//! Direct I/O collaborators of the gateways. Drivers speak in rows and
//! provider payloads and return their own error types; the gateways turn
//! both into domain values.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sea_orm::DbErr;
use serde::Deserialize;

use crate::domain::entities::{SessionToken, User};
use crate::entity::{stores, users};
use crate::error::GoogleError;

/// Column values written for a user insert or update
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub sex: f32,
    pub gender: f32,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
            sex: user.sex(),
            gender: user.gender(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDriver: Send + Sync {
    async fn create_user(&self, record: UserRecord) -> Result<users::Model, DbErr>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr>;

    /// Fails with `DbErr::RecordNotUpdated` when no row has `id`
    async fn update_user(&self, id: i32, record: UserRecord) -> Result<users::Model, DbErr>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreDriver: Send + Sync {
    async fn find_all_stores(&self) -> Result<Vec<stores::Model>, DbErr>;

    async fn find_favorite_stores(&self, user_id: i32) -> Result<Vec<stores::Model>, DbErr>;

    /// Upsert the store and link it to the user in one transaction
    ///
    /// Returns `false` when the link already existed.
    async fn save_favorite_store(&self, user_id: i32, store: stores::Model)
        -> Result<bool, DbErr>;

    /// Most favorited stores first
    async fn find_top_favorite_stores(&self, limit: u64) -> Result<Vec<stores::Model>, DbErr>;
}

/// A place from the Places API (New), restricted to the requested field mask
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub id: String,
    pub display_name: Option<LocalizedText>,
    pub regular_opening_hours: Option<OpeningHours>,
    pub price_level: Option<String>,
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningHours {
    pub weekday_descriptions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GoogleMapDriver: Send + Sync {
    /// Places around the configured search center
    async fn search_nearby(&self) -> Result<Vec<Place>, GoogleError>;
}

/// The verified identity returned by Google's userinfo endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleProfile {
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GoogleOAuthDriver: Send + Sync {
    /// Consent URL carrying `state` back to the callback
    fn authorization_url(&self, state: &str) -> String;

    /// Exchange the authorization code and fetch the account profile
    async fn fetch_profile(&self, code: &str) -> Result<GoogleProfile, GoogleError>;
}

#[cfg_attr(test, automock)]
pub trait TokenDriver: Send + Sync {
    /// Token for an established session of a registered user
    fn issue_session(
        &self,
        user_id: i32,
        email: &str,
    ) -> Result<SessionToken, jsonwebtoken::errors::Error>;

    /// Token proving a Google-verified email that has no user yet
    fn issue_signup(&self, email: &str) -> Result<SessionToken, jsonwebtoken::errors::Error>;
}

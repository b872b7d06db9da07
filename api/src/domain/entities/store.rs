//! Store domain entity
//!
//! A place returned by the maps provider or saved as a favorite. Coordinates
//! stay string-encoded exactly as the client or provider sent them.

use serde::Serialize;

use crate::domain::validation::ValidationErrors;

/// External place identifier issued by the maps provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoreId(pub String);

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub regular_opening_hours: String,
    pub price_level: String,
    pub latitude: String,
    pub longitude: String,
}

impl Store {
    /// Build a store, requiring id, name and both coordinates
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        regular_opening_hours: impl Into<String>,
        price_level: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let id = id.into();
        let name = name.into();
        let latitude = latitude.into();
        let longitude = longitude.into();

        let mut errors = ValidationErrors::new();
        errors.check(id.trim().is_empty(), "store id is required");
        errors.check(name.trim().is_empty(), "store name is required");
        errors.check(latitude.trim().is_empty(), "latitude is required");
        errors.check(longitude.trim().is_empty(), "longitude is required");

        errors.into_result(|| Self {
            id: StoreId(id),
            name,
            regular_opening_hours: regular_opening_hours.into(),
            price_level: price_level.into(),
            latitude,
            longitude,
        })
    }
}

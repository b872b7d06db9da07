//! Gateway for StoreRepository
//!
//! Saved stores come from Postgres, nearby stores from Google Places.

use async_trait::async_trait;

use super::drivers::{GoogleMapDriver, Place, StoreDriver};
use crate::domain::entities::{FavoriteOutcome, Store, StoreId, UserId};
use crate::domain::ports::StoreRepository;
use crate::entity::stores;
use crate::error::DomainError;

/// How many stores the favorite ranking returns
pub const TOP_FAVORITE_LIMIT: u64 = 10;

pub struct StoreDrivers {
    pub stores: Box<dyn StoreDriver>,
    pub maps: Box<dyn GoogleMapDriver>,
}

pub struct StoreGateway {
    stores: Box<dyn StoreDriver>,
    maps: Box<dyn GoogleMapDriver>,
}

impl StoreGateway {
    pub fn new(drivers: StoreDrivers) -> Self {
        Self {
            stores: drivers.stores,
            maps: drivers.maps,
        }
    }
}

impl From<stores::Model> for Store {
    fn from(m: stores::Model) -> Self {
        Self {
            id: StoreId(m.id),
            name: m.name,
            regular_opening_hours: m.regular_opening_hours,
            price_level: m.price_level,
            latitude: m.latitude,
            longitude: m.longitude,
        }
    }
}

fn to_model(store: &Store) -> stores::Model {
    stores::Model {
        id: store.id.0.clone(),
        name: store.name.clone(),
        regular_opening_hours: store.regular_opening_hours.clone(),
        price_level: store.price_level.clone(),
        latitude: store.latitude.clone(),
        longitude: store.longitude.clone(),
        created_at: None,
    }
}

/// Convert a provider place, `None` when a required field is missing
fn place_to_store(place: Place) -> Option<Store> {
    let name = place.display_name.map(|n| n.text).unwrap_or_default();
    let hours = place
        .regular_opening_hours
        .map(|h| h.weekday_descriptions.join("\n"))
        .unwrap_or_default();
    let (latitude, longitude) = place
        .location
        .map(|l| (l.latitude.to_string(), l.longitude.to_string()))
        .unwrap_or_default();

    match Store::new(
        place.id.clone(),
        name,
        hours,
        place.price_level.unwrap_or_default(),
        latitude,
        longitude,
    ) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!(place_id = %place.id, "Skipping place: {}", e);
            None
        }
    }
}

#[async_trait]
impl StoreRepository for StoreGateway {
    async fn get_all(&self) -> Result<Vec<Store>, DomainError> {
        let models = self.stores.find_all_stores().await?;
        Ok(models.into_iter().map(Store::from).collect())
    }

    async fn get_near_stores(&self) -> Result<Vec<Store>, DomainError> {
        let places = self.maps.search_nearby().await.map_err(|e| {
            tracing::error!("Nearby search failed: {}", e);
            DomainError::Upstream(e.to_string())
        })?;

        Ok(places.into_iter().filter_map(place_to_store).collect())
    }

    async fn get_favorite_stores(&self, user_id: UserId) -> Result<Vec<Store>, DomainError> {
        let models = self.stores.find_favorite_stores(user_id.0).await?;
        Ok(models.into_iter().map(Store::from).collect())
    }

    async fn save_favorite_store(
        &self,
        store: &Store,
        user_id: UserId,
    ) -> Result<FavoriteOutcome, DomainError> {
        let inserted = self
            .stores
            .save_favorite_store(user_id.0, to_model(store))
            .await?;

        Ok(if inserted {
            FavoriteOutcome::Saved
        } else {
            FavoriteOutcome::AlreadyFavorited
        })
    }

    async fn get_top_favorite_stores(&self) -> Result<Vec<Store>, DomainError> {
        let models = self
            .stores
            .find_top_favorite_stores(TOP_FAVORITE_LIMIT)
            .await?;
        Ok(models.into_iter().map(Store::from).collect())
    }
}

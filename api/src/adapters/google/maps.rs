//! Places API (New) driver

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::handle_response;
use crate::adapters::gateway::drivers::{GoogleMapDriver, Place};
use crate::error::GoogleError;

pub const PLACES_BASE_URL: &str = "https://places.googleapis.com";

const FIELD_MASK: &str =
    "places.id,places.displayName,places.regularOpeningHours,places.priceLevel,places.location";

const MAX_RESULT_COUNT: u32 = 20;

/// Circle the nearby search is restricted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

pub struct GooglePlacesDriver {
    http: Client,
    base_url: String,
    api_key: String,
    area: SearchArea,
}

impl GooglePlacesDriver {
    pub fn new(http: Client, api_key: String, area: SearchArea) -> Self {
        Self::with_base_url(http, PLACES_BASE_URL.to_string(), api_key, area)
    }

    pub fn with_base_url(http: Client, base_url: String, api_key: String, area: SearchArea) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            area,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchNearbyRequest {
    max_result_count: u32,
    location_restriction: LocationRestriction,
}

#[derive(Serialize)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Serialize)]
struct Circle {
    center: Center,
    radius: f64,
}

#[derive(Serialize)]
struct Center {
    latitude: f64,
    longitude: f64,
}

/// An empty result omits `places` entirely
#[derive(Deserialize, Default)]
struct SearchNearbyResponse {
    #[serde(default)]
    places: Vec<Place>,
}

#[async_trait]
impl GoogleMapDriver for GooglePlacesDriver {
    async fn search_nearby(&self) -> Result<Vec<Place>, GoogleError> {
        let body = SearchNearbyRequest {
            max_result_count: MAX_RESULT_COUNT,
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: Center {
                        latitude: self.area.latitude,
                        longitude: self.area.longitude,
                    },
                    radius: self.area.radius_meters,
                },
            },
        };

        let resp = self
            .http
            .post(format!("{}/v1/places:searchNearby", self.base_url))
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        let result: SearchNearbyResponse = handle_response(resp).await?;
        tracing::debug!(count = result.places.len(), "Nearby search returned places");
        Ok(result.places)
    }
}

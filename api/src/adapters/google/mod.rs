//! Google API drivers
//!
//! OAuth sign-in and Places (New) nearby search over reqwest.

pub mod maps;
pub mod oauth;

pub use maps::{GooglePlacesDriver, SearchArea};
pub use oauth::{GoogleOAuthClient, GoogleOAuthSettings};

use serde::Deserialize;

use crate::error::GoogleError;

async fn handle_response<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, GoogleError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| GoogleError::Deserialization(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(GoogleError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

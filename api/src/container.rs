//! Composition root
//!
//! Builds the controller factories from configuration. Shared handles
//! (database pool, HTTP client, signing keys) are captured once and
//! cloned into the drivers of every request.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::adapters::{
    GoogleOAuthClient, GoogleOAuthSettings, GooglePlacesDriver, PostgresStoreDriver,
    PostgresUserDriver, SearchArea, StoreDrivers, StoreGateway, UserDrivers, UserGateway,
};
use crate::adapters::presenter::{new_store_output_port, new_user_output_port};
use crate::app::{new_store_input_port, new_user_input_port};
use crate::auth::{JwtCodec, SessionState};
use crate::config::Config;
use crate::domain::ports::{StoreRepository, UserRepository};
use crate::handlers::{StoreController, UserController};
use crate::web::AuthCookies;
use crate::AppState;

pub fn build_state(config: &Config, db: DatabaseConnection) -> AppState {
    let http = reqwest::Client::new();
    let cookies = AuthCookies::new(
        config.jwt_token_name.clone(),
        config.jwt_ttl_seconds,
        config.cookie_secure,
    );
    let codec = JwtCodec::new(&config.jwt_secret, config.jwt_ttl_seconds);

    let users = user_controller(config, db.clone(), http.clone(), cookies.clone(), codec.clone());
    let stores = store_controller(config, db, http);

    AppState {
        users,
        stores,
        session: SessionState { cookies, codec },
    }
}

fn user_controller(
    config: &Config,
    db: DatabaseConnection,
    http: reqwest::Client,
    cookies: AuthCookies,
    codec: JwtCodec,
) -> UserController {
    let oauth = GoogleOAuthSettings::new(
        config.google_client_id.clone(),
        config.google_client_secret.clone(),
        config.google_redirect_uri.clone(),
    );
    let app_url = config.app_url.clone();

    UserController::new(
        Arc::new(move || UserDrivers {
            users: Box::new(PostgresUserDriver::new(db.clone())),
            oauth: Box::new(GoogleOAuthClient::new(http.clone(), oauth.clone())),
            tokens: Box::new(codec.clone()),
        }),
        Arc::new(move |ctx| new_user_output_port(ctx, cookies.clone(), app_url.clone())),
        Arc::new(new_user_input_port),
        Arc::new(|drivers: UserDrivers| -> Box<dyn UserRepository> {
            Box::new(UserGateway::new(drivers))
        }),
    )
}

fn store_controller(
    config: &Config,
    db: DatabaseConnection,
    http: reqwest::Client,
) -> StoreController {
    let api_key = config.google_maps_api_key.clone();
    let area = SearchArea {
        latitude: config.search_latitude,
        longitude: config.search_longitude,
        radius_meters: config.search_radius_meters,
    };

    StoreController::new(
        Arc::new(move || StoreDrivers {
            stores: Box::new(PostgresStoreDriver::new(db.clone())),
            maps: Box::new(GooglePlacesDriver::new(http.clone(), api_key.clone(), area)),
        }),
        Arc::new(new_store_output_port),
        Arc::new(new_store_input_port),
        Arc::new(|drivers: StoreDrivers| -> Box<dyn StoreRepository> {
            Box::new(StoreGateway::new(drivers))
        }),
    )
}

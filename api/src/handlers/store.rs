//! Store handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Response, Extension};
use serde::Deserialize;

use super::validation::{RequestValidator, Validate};
use super::{missing_user_id, parse, reject, respond};
use crate::adapters::gateway::StoreDrivers;
use crate::domain::entities::{Store, UserId};
use crate::domain::ports::{StoreInputPort, StoreOutputPort, StoreRepository};
use crate::domain::validation::ValidationErrors;
use crate::web::WebContext;
use crate::AppState;

pub type StoreDriverFactory = Arc<dyn Fn() -> StoreDrivers + Send + Sync>;
pub type StoreRepositoryFactory =
    Arc<dyn Fn(StoreDrivers) -> Box<dyn StoreRepository> + Send + Sync>;
pub type StoreInputFactory = Arc<
    dyn Fn(Box<dyn StoreRepository>, Box<dyn StoreOutputPort>) -> Box<dyn StoreInputPort>
        + Send
        + Sync,
>;
pub type StoreOutputFactory = Arc<dyn Fn(WebContext) -> Box<dyn StoreOutputPort> + Send + Sync>;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreRequestBody {
    pub store_id: String,
    pub store_name: String,
    pub regular_opening_hours: String,
    pub price_level: String,
    pub latitude: String,
    pub longitude: String,
}

impl Validate for StoreRequestBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        RequestValidator::new("StoreRequestBody")
            .required("StoreId", &self.store_id)
            .required("StoreName", &self.store_name)
            .required("Latitude", &self.latitude)
            .required("Longitude", &self.longitude)
            .finish()
    }
}

#[derive(Clone)]
pub struct StoreController {
    driver_factory: StoreDriverFactory,
    output_factory: StoreOutputFactory,
    input_factory: StoreInputFactory,
    repository_factory: StoreRepositoryFactory,
}

impl StoreController {
    pub fn new(
        driver_factory: StoreDriverFactory,
        output_factory: StoreOutputFactory,
        input_factory: StoreInputFactory,
        repository_factory: StoreRepositoryFactory,
    ) -> Self {
        Self {
            driver_factory,
            output_factory,
            input_factory,
            repository_factory,
        }
    }

    fn input_port(&self, ctx: &WebContext) -> Box<dyn StoreInputPort> {
        let output = (self.output_factory)(ctx.clone());
        let drivers = (self.driver_factory)();
        let repository = (self.repository_factory)(drivers);
        (self.input_factory)(repository, output)
    }

    pub async fn get_stores(&self) -> Response {
        let ctx = WebContext::new();
        let result = self.input_port(&ctx).get_stores().await;
        respond(ctx, result).await
    }

    pub async fn get_near_stores(&self) -> Response {
        let ctx = WebContext::new();
        let result = self.input_port(&ctx).get_near_stores().await;
        respond(ctx, result).await
    }

    pub async fn get_favorite_stores(&self, user_id: Option<UserId>) -> Response {
        let Some(user_id) = user_id else {
            return missing_user_id();
        };

        let ctx = WebContext::new();
        let result = self.input_port(&ctx).get_favorite_stores(user_id).await;
        respond(ctx, result).await
    }

    pub async fn save_favorite_store(&self, user_id: Option<UserId>, body: Bytes) -> Response {
        let Some(user_id) = user_id else {
            return missing_user_id();
        };
        let store = match parse::<StoreRequestBody>(&body).and_then(|b| {
            Store::new(
                b.store_id,
                b.store_name,
                b.regular_opening_hours,
                b.price_level,
                b.latitude,
                b.longitude,
            )
            .map_err(|e| reject(e.to_string()))
        }) {
            Ok(store) => store,
            Err(rejection) => return rejection,
        };

        let ctx = WebContext::new();
        let result = self
            .input_port(&ctx)
            .save_favorite_store(&store, user_id)
            .await;
        respond(ctx, result).await
    }

    pub async fn get_top_favorite_stores(&self) -> Response {
        let ctx = WebContext::new();
        let result = self.input_port(&ctx).get_top_favorite_stores().await;
        respond(ctx, result).await
    }
}

pub async fn get_stores(State(state): State<AppState>) -> Response {
    state.stores.get_stores().await
}

pub async fn get_near_stores(State(state): State<AppState>) -> Response {
    state.stores.get_near_stores().await
}

pub async fn get_favorite_stores(
    State(state): State<AppState>,
    user_id: Option<Extension<UserId>>,
) -> Response {
    state
        .stores
        .get_favorite_stores(user_id.map(|Extension(id)| id))
        .await
}

pub async fn save_favorite_store(
    State(state): State<AppState>,
    user_id: Option<Extension<UserId>>,
    body: Bytes,
) -> Response {
    state
        .stores
        .save_favorite_store(user_id.map(|Extension(id)| id), body)
        .await
}

pub async fn get_top_favorite_stores(State(state): State<AppState>) -> Response {
    state.stores.get_top_favorite_stores().await
}

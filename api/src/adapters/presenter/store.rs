//! Store presenter

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::domain::entities::Store;
use crate::domain::ports::StoreOutputPort;
use crate::error::DomainError;
use crate::web::WebContext;

pub struct StorePresenter {
    ctx: WebContext,
}

impl StorePresenter {
    pub fn new(ctx: WebContext) -> Self {
        Self { ctx }
    }
}

pub fn new_store_output_port(ctx: WebContext) -> Box<dyn StoreOutputPort> {
    Box::new(StorePresenter::new(ctx))
}

#[async_trait]
impl StoreOutputPort for StorePresenter {
    async fn output_all_stores(&self, stores: Vec<Store>) -> Result<(), DomainError> {
        self.ctx.write((StatusCode::OK, Json(stores))).await;
        Ok(())
    }

    async fn output_save_favorite_result(&self) -> Result<(), DomainError> {
        self.ctx.write((StatusCode::OK, Json(json!({})))).await;
        Ok(())
    }

    async fn output_already_favorited(&self) -> Result<(), DomainError> {
        self.ctx
            .write((
                StatusCode::CONFLICT,
                Json(json!({ "error": "Already exist favorite store" })),
            ))
            .await;
        Ok(())
    }
}

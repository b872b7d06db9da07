//! HTTP handlers
//!
//! Controllers parse and validate requests, then assemble a fresh
//! interactor and presenter for every request from injected factories.

pub mod store;
pub mod user;
pub mod validation;

pub use store::{
    get_favorite_stores, get_near_stores, get_stores, get_top_favorite_stores,
    save_favorite_store, StoreController,
};
pub use user::{
    auth_callback, auth_url, create_user, login_user, signup_user, update_user, UserController,
};

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::{AppError, DomainError};
use crate::web::WebContext;
use validation::Validate;

/// Bad input is answered with a `500` carrying the message as a JSON string
fn reject(message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::debug!(%message, "Rejected request");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(message)).into_response()
}

fn missing_user_id() -> Response {
    (StatusCode::BAD_REQUEST, Json("user_id is required")).into_response()
}

/// Decode and structurally validate a request body
fn parse<T: DeserializeOwned + Validate>(body: &Bytes) -> Result<T, Response> {
    let request: T = validation::decode(body).map_err(reject)?;
    request.validate().map_err(|e| reject(e.to_string()))?;
    Ok(request)
}

/// The presenter's response, or the rendered use-case error
async fn respond(ctx: WebContext, result: Result<(), DomainError>) -> Response {
    match result {
        Ok(()) => ctx.take_response().await,
        Err(e) => AppError::from(e).into_response(),
    }
}

//! Request-scoped response slot
//!
//! The controller hands a clone to the presenter; whatever the presenter
//! writes is what the controller returns.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct WebContext {
    response: Arc<Mutex<Option<Response>>>,
}

impl WebContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the response, replacing any earlier one
    pub async fn write(&self, response: impl IntoResponse) {
        *self.response.lock().await = Some(response.into_response());
    }

    /// The written response, or an empty `200` when nothing was written
    pub async fn take_response(&self) -> Response {
        self.response
            .lock()
            .await
            .take()
            .unwrap_or_else(|| StatusCode::OK.into_response())
    }
}

//! Presenters
//!
//! Output-port implementations that render use-case results into the
//! request's [`WebContext`](crate::web::WebContext).

pub mod store;
pub mod user;

pub use store::new_store_output_port;
pub use user::new_user_output_port;

#[cfg(test)]
pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

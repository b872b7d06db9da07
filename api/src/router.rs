//! Route table

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::session_middleware;
use crate::handlers;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// All routes, with the session cookie accepted from `allowed_origin`
pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    // 2 req/sec sustained, burst of 5, keyed on the peer address
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Sign-in routes
    let rate_limited_routes = Router::new()
        .route("/user/login", post(handlers::login_user))
        .route("/auth/url", get(handlers::auth_url))
        .route("/auth/callback", get(handlers::auth_callback))
        .layer(GovernorLayer {
            config: governor_config,
        });

    Router::new()
        .route("/health", get(health))
        .route(
            "/user",
            post(handlers::create_user).put(handlers::update_user),
        )
        .route("/user/signup", post(handlers::signup_user))
        .route("/stores", get(handlers::get_stores))
        .route("/stores/near", get(handlers::get_near_stores))
        .route(
            "/stores/favorite",
            get(handlers::get_favorite_stores).post(handlers::save_favorite_store),
        )
        .route(
            "/stores/favorite/top",
            get(handlers::get_top_favorite_stores),
        )
        .merge(rate_limited_routes)
        .layer(middleware::from_fn_with_state(
            state.session.clone(),
            session_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

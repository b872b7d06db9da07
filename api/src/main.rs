//! Store Map API Server
//!
//! Lets users sign in with Google, browse stores near a fixed point and
//! keep a list of favorite stores. Controllers assemble a fresh
//! presenter, gateway and interactor for every request (ports & adapters).

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod container;
mod domain;
mod entity;
mod error;
mod handlers;
mod router;
mod web;

#[cfg(test)]
mod test_utils;

use auth::SessionState;
use config::Config;
use handlers::{StoreController, UserController};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserController,
    pub stores: StoreController,
    pub session: SessionState,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storemap_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Store Map API...");

    let config = Config::from_env().context("Invalid configuration")?;
    if !config.google_oauth_enabled() {
        tracing::warn!("GOOGLE_CLIENT_ID or GOOGLE_CLIENT_SECRET not set, Google sign-in will fail");
    }
    if config.google_maps_api_key.is_empty() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set, nearby search will fail");
    }

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");
    adapters::ensure_schema(&db)
        .await
        .context("Failed to prepare database schema")?;

    let allowed_origin =
        HeaderValue::from_str(&config.app_url).context("APP_URL is not a valid origin")?;
    let state = container::build_state(&config, db);
    let app = router::build_router(state, allowed_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}

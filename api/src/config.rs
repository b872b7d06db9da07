use std::env;

use anyhow::{bail, Context};

/// Seconds in one week, the default session lifetime
const DEFAULT_JWT_TTL_SECONDS: i64 = 60 * 60 * 24 * 7;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Name of the cookie carrying the session token
    pub jwt_token_name: String,
    pub jwt_secret: String,
    pub jwt_ttl_seconds: i64,
    /// Adds the `Secure` attribute to the session cookie
    pub cookie_secure: bool,
    /// Frontend base URL used for post-login redirects
    pub app_url: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_uri: String,
    pub google_maps_api_key: String,
    /// Center and radius of the nearby-store search
    pub search_latitude: f64,
    pub search_longitude: f64,
    pub search_radius_meters: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parse_or("PORT", 8080),
            jwt_token_name: env::var("JWT_TOKEN_NAME").unwrap_or_else(|_| "auth_token".to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl_seconds: parse_or("JWT_TTL_SECONDS", DEFAULT_JWT_TTL_SECONDS),
            cookie_secure: parse_or("COOKIE_SECURE", false),
            app_url: env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            google_client_id: env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            google_client_secret: env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            google_redirect_uri: env::var("GOOGLE_REDIRECT_URI")
                .unwrap_or_else(|_| "http://localhost:8080/auth/callback".to_string()),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            // Tokyo Station
            search_latitude: parse_or("SEARCH_LATITUDE", 35.681_236),
            search_longitude: parse_or("SEARCH_LONGITUDE", 139.767_125),
            search_radius_meters: parse_or("SEARCH_RADIUS_METERS", 1000.0),
        })
    }

    /// Check if Google OAuth is configured
    pub fn google_oauth_enabled(&self) -> bool {
        !self.google_client_id.is_empty() && !self.google_client_secret.is_empty()
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// A variable the server cannot start without. Blank counts as unset.
fn required(key: &str) -> anyhow::Result<String> {
    let value = env::var(key).with_context(|| format!("{} must be set", key))?;
    if value.trim().is_empty() {
        bail!("{} must not be empty", key);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_unset_variable() {
        env::remove_var("STOREMAP_TEST_UNSET_SECRET");

        let err = required("STOREMAP_TEST_UNSET_SECRET").unwrap_err();

        assert_eq!(err.to_string(), "STOREMAP_TEST_UNSET_SECRET must be set");
    }

    #[test]
    fn required_rejects_blank_variable() {
        env::set_var("STOREMAP_TEST_BLANK_SECRET", "  ");

        let err = required("STOREMAP_TEST_BLANK_SECRET").unwrap_err();

        assert_eq!(err.to_string(), "STOREMAP_TEST_BLANK_SECRET must not be empty");
    }

    #[test]
    fn required_returns_value() {
        env::set_var("STOREMAP_TEST_SET_SECRET", "s3cret");

        assert_eq!(required("STOREMAP_TEST_SET_SECRET").unwrap(), "s3cret");
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        env::set_var("STOREMAP_TEST_PORT", "not-a-port");

        assert_eq!(parse_or("STOREMAP_TEST_PORT", 8080u16), 8080);
    }
}

//! Google OAuth 2.0 driver
//!
//! Authorization-code flow: build the consent URL, exchange the code for
//! an access token, then read the account's userinfo.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use super::handle_response;
use crate::adapters::gateway::drivers::{GoogleOAuthDriver, GoogleProfile};
use crate::error::GoogleError;

pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

const SCOPE: &str = "openid email profile";

#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl GoogleOAuthSettings {
    /// Settings pointing at Google's production endpoints
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            auth_url: AUTH_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            userinfo_url: USERINFO_URL.to_string(),
        }
    }
}

pub struct GoogleOAuthClient {
    http: Client,
    settings: GoogleOAuthSettings,
}

impl GoogleOAuthClient {
    pub fn new(http: Client, settings: GoogleOAuthSettings) -> Self {
        Self { http, settings }
    }

    async fn exchange_code(&self, code: &str) -> Result<String, GoogleError> {
        let resp = self
            .http
            .post(&self.settings.token_url)
            .form(&[
                ("code", code),
                ("client_id", self.settings.client_id.as_str()),
                ("client_secret", self.settings.client_secret.as_str()),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let token: TokenResponse = handle_response(resp).await?;
        token.access_token.ok_or(GoogleError::MissingField("access_token"))
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[async_trait]
impl GoogleOAuthDriver for GoogleOAuthClient {
    fn authorization_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=online&state={}",
            self.settings.auth_url,
            encode(&self.settings.client_id),
            encode(&self.settings.redirect_uri),
            encode(SCOPE),
            encode(state),
        )
    }

    async fn fetch_profile(&self, code: &str) -> Result<GoogleProfile, GoogleError> {
        let access_token = self.exchange_code(code).await?;

        let resp = self
            .http
            .get(&self.settings.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(resp).await
    }
}

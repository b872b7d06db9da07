//! JWT issuing and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::adapters::gateway::drivers::TokenDriver;
use crate::domain::entities::{SessionToken, UserId};

/// Claims of both token kinds
///
/// A session token names the user in `sub`. A signup token has no `sub`
/// and only vouches for a Google-verified email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.as_deref().and_then(|s| s.parse().ok())
    }
}

#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl JwtCodec {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    fn sign(
        &self,
        sub: Option<String>,
        email: &str,
    ) -> Result<SessionToken, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub,
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map(SessionToken)
    }

    /// Verify signature and expiry
    pub fn decode(&self, token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<SessionClaims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

impl TokenDriver for JwtCodec {
    fn issue_session(
        &self,
        user_id: i32,
        email: &str,
    ) -> Result<SessionToken, jsonwebtoken::errors::Error> {
        self.sign(Some(user_id.to_string()), email)
    }

    fn issue_signup(&self, email: &str) -> Result<SessionToken, jsonwebtoken::errors::Error> {
        self.sign(None, email)
    }
}

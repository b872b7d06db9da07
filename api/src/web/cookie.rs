//! Auth cookie rendering and parsing

use axum::http::header::{InvalidHeaderValue, COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use cookie::time::Duration;
use cookie::{Cookie, CookieBuilder, SameSite};
use thiserror::Error;

/// Cookie holding the OAuth `state` between `/auth/url` and the callback
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Seconds a user has to finish the Google consent screen
pub const OAUTH_STATE_MAX_AGE: i64 = 600;

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("value is not a valid cookie value")]
    InvalidValue,

    #[error(transparent)]
    Header(#[from] InvalidHeaderValue),
}

/// An HttpOnly, `SameSite=Lax` cookie scoped to `/`
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    max_age: i64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age: i64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age,
            secure,
        }
    }

    fn builder(&self, value: String) -> CookieBuilder<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
    }

    /// `Set-Cookie` value carrying `value`
    pub fn set_header(&self, value: &str) -> Result<HeaderValue, CookieError> {
        if value.is_empty() || !value.bytes().all(is_cookie_octet) {
            return Err(CookieError::InvalidValue);
        }
        let cookie = self
            .builder(value.to_string())
            .max_age(Duration::seconds(self.max_age))
            .build();

        Ok(HeaderValue::from_str(&cookie.to_string())?)
    }

    /// `Set-Cookie` value expiring this cookie in the browser
    pub fn clear_header(&self) -> Result<HeaderValue, CookieError> {
        let mut cookie = self.builder(String::new()).build();
        cookie.make_removal();

        Ok(HeaderValue::from_str(&cookie.to_string())?)
    }

    /// Find this cookie among the request's `Cookie` headers
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse(value))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == self.name)
            .map(|cookie| cookie.value_trimmed().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// RFC 6265 `cookie-octet`
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// Session cookie plus the short-lived OAuth state cookie
#[derive(Debug, Clone)]
pub struct AuthCookies {
    pub session: SessionCookie,
    pub oauth_state: SessionCookie,
}

impl AuthCookies {
    pub fn new(session_name: impl Into<String>, session_max_age: i64, secure: bool) -> Self {
        Self {
            session: SessionCookie::new(session_name, session_max_age, secure),
            oauth_state: SessionCookie::new(OAUTH_STATE_COOKIE, OAUTH_STATE_MAX_AGE, secure),
        }
    }
}

//! Session middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use super::jwt::JwtCodec;
use crate::web::AuthCookies;

#[derive(Clone)]
pub struct SessionState {
    pub cookies: AuthCookies,
    pub codec: JwtCodec,
}

/// Decode the session cookie into request extensions
///
/// Inserts [`SessionClaims`](super::SessionClaims) for any valid token and
/// the [`UserId`](crate::domain::entities::UserId) when the token names a
/// user. Requests without a valid token pass through untouched.
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let claims = state
        .cookies
        .session
        .read(request.headers())
        .map(|token| state.codec.decode(&token));

    match claims {
        Some(Ok(claims)) => {
            if let Some(user_id) = claims.user_id() {
                request.extensions_mut().insert(user_id);
            }
            request.extensions_mut().insert(claims);
        }
        Some(Err(e)) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
        }
        None => {}
    }

    next.run(request).await
}

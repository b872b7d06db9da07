//! User presenter

use async_trait::async_trait;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::AppendHeaders;
use axum::Json;
use serde_json::json;

use crate::domain::entities::{AuthorizationRequest, SessionToken};
use crate::domain::ports::UserOutputPort;
use crate::error::DomainError;
use crate::web::cookie::CookieError;
use crate::web::{AuthCookies, WebContext};

pub struct UserPresenter {
    ctx: WebContext,
    cookies: AuthCookies,
    app_url: String,
}

fn cookie_err(e: CookieError) -> DomainError {
    DomainError::Internal(format!("Invalid cookie: {}", e))
}

impl UserPresenter {
    pub fn new(ctx: WebContext, cookies: AuthCookies, app_url: String) -> Self {
        Self {
            ctx,
            cookies,
            app_url,
        }
    }

    fn cookie_header(&self, token: &SessionToken) -> Result<HeaderValue, DomainError> {
        self.cookies
            .session
            .set_header(token.as_str())
            .map_err(cookie_err)
    }

    async fn ok_with_session(&self, token: &SessionToken) -> Result<(), DomainError> {
        let cookie = self.cookie_header(token)?;
        self.ctx
            .write((StatusCode::OK, [(SET_COOKIE, cookie)], Json(json!({}))))
            .await;
        Ok(())
    }

    async fn redirect_with_session(
        &self,
        path: &str,
        token: &SessionToken,
    ) -> Result<(), DomainError> {
        let location = HeaderValue::from_str(&format!("{}{}", self.app_url, path))
            .map_err(|e| DomainError::Internal(format!("Invalid redirect location: {}", e)))?;
        let cookie = self.cookie_header(token)?;
        // The state is single use
        let clear_state = self.cookies.oauth_state.clear_header().map_err(cookie_err)?;
        self.ctx
            .write((
                StatusCode::FOUND,
                AppendHeaders([
                    (LOCATION, location),
                    (SET_COOKIE, cookie),
                    (SET_COOKIE, clear_state),
                ]),
            ))
            .await;
        Ok(())
    }

    async fn error(&self, status: StatusCode, message: &str) -> Result<(), DomainError> {
        self.ctx
            .write((status, Json(json!({ "error": message }))))
            .await;
        Ok(())
    }
}

pub fn new_user_output_port(
    ctx: WebContext,
    cookies: AuthCookies,
    app_url: String,
) -> Box<dyn UserOutputPort> {
    Box::new(UserPresenter::new(ctx, cookies, app_url))
}

#[async_trait]
impl UserOutputPort for UserPresenter {
    async fn output_create_result(&self) -> Result<(), DomainError> {
        self.ctx.write((StatusCode::OK, Json(json!({})))).await;
        Ok(())
    }

    async fn output_update_result(&self) -> Result<(), DomainError> {
        self.ctx.write((StatusCode::OK, Json(json!({})))).await;
        Ok(())
    }

    async fn output_login_result(&self) -> Result<(), DomainError> {
        self.ctx.write((StatusCode::OK, Json(json!({})))).await;
        Ok(())
    }

    async fn output_not_registered(&self) -> Result<(), DomainError> {
        self.error(StatusCode::NOT_FOUND, "not_registered").await
    }

    async fn output_auth_url(&self, request: &AuthorizationRequest) -> Result<(), DomainError> {
        let state = self
            .cookies
            .oauth_state
            .set_header(&request.state)
            .map_err(cookie_err)?;
        self.ctx
            .write((
                StatusCode::OK,
                [(SET_COOKIE, state)],
                Json(json!({ "url": request.url })),
            ))
            .await;
        Ok(())
    }

    async fn output_login_with_auth(&self, token: &SessionToken) -> Result<(), DomainError> {
        self.redirect_with_session("/", token).await
    }

    async fn output_redirect_to_signup(&self, token: &SessionToken) -> Result<(), DomainError> {
        self.redirect_with_session("/signup", token).await
    }

    async fn output_signup_with_auth(&self, token: &SessionToken) -> Result<(), DomainError> {
        self.ok_with_session(token).await
    }

    async fn output_already_signedup(&self) -> Result<(), DomainError> {
        self.error(StatusCode::CONFLICT, "Already signed up").await
    }

    async fn output_has_email_in_request_body(&self) -> Result<(), DomainError> {
        self.error(StatusCode::BAD_REQUEST, "Email is included in Request Body")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::presenter::body_json;

    fn presenter() -> (WebContext, UserPresenter) {
        let ctx = WebContext::new();
        let presenter = UserPresenter::new(
            ctx.clone(),
            AuthCookies::new("auth_token", 600, false),
            "http://localhost:3000".to_string(),
        );
        (ctx, presenter)
    }

    fn token() -> SessionToken {
        SessionToken("jwt-value".to_string())
    }

    fn set_cookie(response: &axum::response::Response) -> &str {
        response.headers()[SET_COOKIE].to_str().unwrap()
    }

    fn set_cookies(response: &axum::response::Response) -> Vec<&str> {
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn create_result_is_empty_object() {
        let (ctx, presenter) = presenter();

        presenter.output_create_result().await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn update_result_is_empty_object() {
        let (ctx, presenter) = presenter();

        presenter.output_update_result().await.unwrap();

        assert_eq!(body_json(ctx.take_response().await).await, json!({}));
    }

    #[tokio::test]
    async fn login_result_is_empty_object_without_cookie() {
        let (ctx, presenter) = presenter();

        presenter.output_login_result().await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(SET_COOKIE).is_none());
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn not_registered_is_404() {
        let (ctx, presenter) = presenter();

        presenter.output_not_registered().await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "not_registered" }));
    }

    #[tokio::test]
    async fn auth_url_is_returned_under_url_key_with_state_cookie() {
        let (ctx, presenter) = presenter();

        presenter
            .output_auth_url(&AuthorizationRequest {
                url: "https://www.google.com".to_string(),
                state: "state123".to_string(),
            })
            .await
            .unwrap();

        let response = ctx.take_response().await;
        assert!(set_cookie(&response).starts_with("oauth_state=state123;"));
        assert_eq!(
            body_json(response).await,
            json!({ "url": "https://www.google.com" })
        );
    }

    #[tokio::test]
    async fn login_with_auth_redirects_to_app_root() {
        let (ctx, presenter) = presenter();

        presenter.output_login_with_auth(&token()).await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "http://localhost:3000/");
        let cookies = set_cookies(&response);
        assert!(cookies.iter().any(|c| c.starts_with("auth_token=jwt-value;")));
        assert!(cookies
            .iter()
            .any(|c| c.starts_with("oauth_state=;") && c.contains("Max-Age=0")));
    }

    #[tokio::test]
    async fn unregistered_google_account_redirects_to_signup() {
        let (ctx, presenter) = presenter();

        presenter
            .output_redirect_to_signup(&SessionToken("pending".to_string()))
            .await
            .unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "http://localhost:3000/signup");
        assert!(set_cookies(&response)
            .iter()
            .any(|c| c.starts_with("auth_token=pending;")));
    }

    #[tokio::test]
    async fn signup_with_auth_sets_session_cookie() {
        let (ctx, presenter) = presenter();

        presenter.output_signup_with_auth(&token()).await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).contains("HttpOnly"));
    }

    #[tokio::test]
    async fn already_signed_up_is_conflict() {
        let (ctx, presenter) = presenter();

        presenter.output_already_signedup().await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await, json!({ "error": "Already signed up" }));
    }

    #[tokio::test]
    async fn email_in_body_is_bad_request() {
        let (ctx, presenter) = presenter();

        presenter.output_has_email_in_request_body().await.unwrap();

        let response = ctx.take_response().await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Email is included in Request Body" })
        );
    }

    #[tokio::test]
    async fn unencodable_token_is_internal_error() {
        let (_ctx, presenter) = presenter();

        let result = presenter
            .output_signup_with_auth(&SessionToken("bad token".to_string()))
            .await;

        assert!(matches!(result, Err(DomainError::Internal(_))));
    }
}

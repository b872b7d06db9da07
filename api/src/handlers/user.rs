//! User handlers
//!
//! Profile creation and update, email login, Google sign-in and the
//! signup that completes it.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Extension,
};
use serde::Deserialize;

use super::validation::{RequestValidator, Validate};
use super::{missing_user_id, parse, reject, respond};
use crate::adapters::gateway::UserDrivers;
use crate::auth::SessionClaims;
use crate::domain::entities::{User, UserCredentials, UserId};
use crate::domain::ports::{UserInputPort, UserOutputPort, UserRepository};
use crate::domain::validation::ValidationErrors;
use crate::error::AppError;
use crate::web::WebContext;
use crate::AppState;

pub type UserDriverFactory = Arc<dyn Fn() -> UserDrivers + Send + Sync>;
pub type UserRepositoryFactory = Arc<dyn Fn(UserDrivers) -> Box<dyn UserRepository> + Send + Sync>;
pub type UserInputFactory = Arc<
    dyn Fn(Box<dyn UserRepository>, Box<dyn UserOutputPort>) -> Box<dyn UserInputPort>
        + Send
        + Sync,
>;
pub type UserOutputFactory = Arc<dyn Fn(WebContext) -> Box<dyn UserOutputPort> + Send + Sync>;

/// Profile fields shared by create and update
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRequestBody {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub sex: f32,
    pub gender: f32,
}

impl Validate for UserRequestBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        RequestValidator::new("UserRequestBody")
            .required("Name", &self.name)
            .required_email("Email", &self.email)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequestBody {
    pub email: String,
}

impl Validate for LoginRequestBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        RequestValidator::new("LoginRequestBody")
            .required_email("Email", &self.email)
            .finish()
    }
}

/// Signup takes the email from the Google-verified token, never the body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequestBody {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub sex: f32,
    pub gender: f32,
}

impl Validate for SignupRequestBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        RequestValidator::new("SignupRequestBody")
            .required("Name", &self.name)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn new_user(
    name: String,
    email: String,
    age: i32,
    sex: f32,
    gender: f32,
) -> Result<User, Response> {
    User::new(name, email, age, sex, gender).map_err(|e| reject(e.to_string()))
}

#[derive(Clone)]
pub struct UserController {
    driver_factory: UserDriverFactory,
    output_factory: UserOutputFactory,
    input_factory: UserInputFactory,
    repository_factory: UserRepositoryFactory,
}

impl UserController {
    pub fn new(
        driver_factory: UserDriverFactory,
        output_factory: UserOutputFactory,
        input_factory: UserInputFactory,
        repository_factory: UserRepositoryFactory,
    ) -> Self {
        Self {
            driver_factory,
            output_factory,
            input_factory,
            repository_factory,
        }
    }

    /// Wire presenter, drivers, repository and interactor for one request
    fn input_port(&self, ctx: &WebContext) -> Box<dyn UserInputPort> {
        let output = (self.output_factory)(ctx.clone());
        let drivers = (self.driver_factory)();
        let repository = (self.repository_factory)(drivers);
        (self.input_factory)(repository, output)
    }

    pub async fn create_user(&self, body: Bytes) -> Response {
        let user = match parse::<UserRequestBody>(&body)
            .and_then(|b| new_user(b.name, b.email, b.age, b.sex, b.gender))
        {
            Ok(user) => user,
            Err(rejection) => return rejection,
        };

        let ctx = WebContext::new();
        let result = self.input_port(&ctx).create_user(&user).await;
        respond(ctx, result).await
    }

    pub async fn update_user(&self, user_id: Option<UserId>, body: Bytes) -> Response {
        let Some(user_id) = user_id else {
            return missing_user_id();
        };
        let user = match parse::<UserRequestBody>(&body)
            .and_then(|b| new_user(b.name, b.email, b.age, b.sex, b.gender))
        {
            Ok(user) => user,
            Err(rejection) => return rejection,
        };

        let ctx = WebContext::new();
        let result = self.input_port(&ctx).update_user(user_id, &user).await;
        respond(ctx, result).await
    }

    pub async fn login_user(&self, body: Bytes) -> Response {
        let credentials = match parse::<LoginRequestBody>(&body)
            .and_then(|b| UserCredentials::new(b.email).map_err(|e| reject(e.to_string())))
        {
            Ok(credentials) => credentials,
            Err(rejection) => return rejection,
        };

        let ctx = WebContext::new();
        let result = self.input_port(&ctx).login_user(&credentials).await;
        respond(ctx, result).await
    }

    pub async fn get_auth_url(&self) -> Response {
        let ctx = WebContext::new();
        let result = self.input_port(&ctx).get_auth_url().await;
        respond(ctx, result).await
    }

    /// `expected_state` is the value of the state cookie set by `/auth/url`
    pub async fn login_with_google(
        &self,
        params: CallbackParams,
        expected_state: Option<String>,
    ) -> Response {
        if let Some(error) = params.error {
            tracing::warn!(%error, "Google sign-in was not granted");
            return AppError::BadRequest(error).into_response();
        }
        let Some(code) = params.code.filter(|c| !c.is_empty()) else {
            return AppError::BadRequest("code is required".to_string()).into_response();
        };
        match (params.state, expected_state) {
            (Some(state), Some(expected)) if state == expected => {}
            _ => {
                tracing::warn!("Google callback state does not match the state cookie");
                return AppError::BadRequest("state mismatch".to_string()).into_response();
            }
        }

        let ctx = WebContext::new();
        let result = self.input_port(&ctx).login_with_google(&code).await;
        respond(ctx, result).await
    }

    pub async fn signup_user(&self, claims: Option<SessionClaims>, body: Bytes) -> Response {
        let Some(claims) = claims else {
            return AppError::Unauthorized.into_response();
        };
        let request = match parse::<SignupRequestBody>(&body) {
            Ok(request) => request,
            Err(rejection) => return rejection,
        };

        let ctx = WebContext::new();
        if !request.email.is_empty() {
            let result = (self.output_factory)(ctx.clone())
                .output_has_email_in_request_body()
                .await;
            return respond(ctx, result).await;
        }

        let user = match new_user(
            request.name,
            claims.email,
            request.age,
            request.sex,
            request.gender,
        ) {
            Ok(user) => user,
            Err(rejection) => return rejection,
        };

        let result = self.input_port(&ctx).signup_user(&user).await;
        respond(ctx, result).await
    }
}

pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Response {
    state.users.create_user(body).await
}

pub async fn update_user(
    State(state): State<AppState>,
    user_id: Option<Extension<UserId>>,
    body: Bytes,
) -> Response {
    state
        .users
        .update_user(user_id.map(|Extension(id)| id), body)
        .await
}

pub async fn login_user(State(state): State<AppState>, body: Bytes) -> Response {
    state.users.login_user(body).await
}

pub async fn signup_user(
    State(state): State<AppState>,
    claims: Option<Extension<SessionClaims>>,
    body: Bytes,
) -> Response {
    state
        .users
        .signup_user(claims.map(|Extension(c)| c), body)
        .await
}

pub async fn auth_url(State(state): State<AppState>) -> Response {
    state.users.get_auth_url().await
}

pub async fn auth_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> Response {
    let expected = state.session.cookies.oauth_state.read(&headers);
    state.users.login_with_google(params, expected).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use axum::http::header::{LOCATION, SET_COOKIE};
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::adapters::presenter::body_json;
    use crate::domain::entities::{AuthorizationRequest, GoogleLogin, SessionToken, SignupOutcome};
    use crate::domain::ports::MockUserRepository;
    use crate::error::DomainError;
    use crate::test_utils::{claims_for, user_controller};

    fn bytes(value: serde_json::Value) -> Bytes {
        Bytes::from(value.to_string())
    }

    fn valid_body() -> Bytes {
        bytes(json!({
            "name": "natori",
            "email": "test@example.com",
            "age": 52,
            "sex": -0.2,
            "gender": 0.3
        }))
    }

    #[tokio::test]
    async fn create_user_with_empty_name_never_builds_repository() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .create_user(bytes(json!({
                "name": "", "email": "x@y.com", "age": 5, "sex": 0, "gender": 0
            })))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!("Key: 'UserRequestBody.Name' Error:Field validation for 'Name' failed on the 'required' tag")
        );
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_user_rejects_undecodable_body() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .create_user(Bytes::from_static(b"{\"name\": "))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await.is_string());
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_user_rejects_negative_age_from_entity() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .create_user(bytes(json!({
                "name": "natori", "email": "test@example.com", "age": -3
            })))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!("age must not be negative"));
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_user_persists_and_presents_empty_object() {
        let (controller, builds) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_create()
                .withf(|user| user.age() == 50 && user.name() == "natori")
                .times(1)
                .returning(|_| Ok(()));
            repository
        });

        let response = controller.create_user(valid_body()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_user_renders_repository_error() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository.expect_create().returning(|_| {
                Err(DomainError::AlreadyExists("test@example.com".to_string()))
            });
            repository
        });

        let response = controller.create_user(valid_body()).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn update_user_requires_user_id() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller.update_user(None, valid_body()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!("user_id is required"));
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_user_targets_session_user() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_update()
                .withf(|id, _| *id == UserId(3))
                .times(1)
                .returning(|_, _| Ok(()));
            repository
        });

        let response = controller.update_user(Some(UserId(3)), valid_body()).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_user_reports_registered_email_without_cookie() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_find_by()
                .withf(|credentials| credentials.email() == "victim@example.com")
                .times(1)
                .returning(|_| Ok(true));
            repository
        });

        let response = controller
            .login_user(bytes(json!({ "email": "victim@example.com" })))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(SET_COOKIE).is_none());
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn login_user_reports_unregistered_email() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository.expect_find_by().returning(|_| Ok(false));
            repository
        });

        let response = controller
            .login_user(bytes(json!({ "email": "nobody@example.com" })))
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "not_registered" }));
    }

    #[tokio::test]
    async fn login_user_rejects_malformed_email() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .login_user(bytes(json!({ "email": "not-an-email" })))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!("Key: 'LoginRequestBody.Email' Error:Field validation for 'Email' failed on the 'email' tag")
        );
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn auth_url_returns_repository_url_and_state_cookie() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_generate_auth_url()
                .returning(|| AuthorizationRequest {
                    url: "https://accounts.google.com/o/oauth2/v2/auth?state=s1".to_string(),
                    state: "s1".to_string(),
                });
            repository
        });

        let response = controller.get_auth_url().await;

        assert!(response.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("oauth_state=s1;"));
        assert_eq!(
            body_json(response).await,
            json!({ "url": "https://accounts.google.com/o/oauth2/v2/auth?state=s1" })
        );
    }

    #[tokio::test]
    async fn google_callback_without_code_is_bad_request() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .login_with_google(
                CallbackParams {
                    code: None,
                    state: Some("s1".to_string()),
                    error: None,
                },
                Some("s1".to_string()),
            )
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn google_callback_with_denied_consent_is_bad_request() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .login_with_google(
                CallbackParams {
                    code: None,
                    state: Some("s1".to_string()),
                    error: Some("access_denied".to_string()),
                },
                Some("s1".to_string()),
            )
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn google_callback_redirects_new_account_to_signup() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_authenticate_google()
                .withf(|code| code == "abc")
                .returning(|_| Ok(GoogleLogin::Unregistered(SessionToken("pending".to_string()))));
            repository
        });

        let response = controller
            .login_with_google(
                CallbackParams {
                    code: Some("abc".to_string()),
                    state: Some("s1".to_string()),
                    error: None,
                },
                Some("s1".to_string()),
            )
            .await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "http://localhost:3000/signup");
    }

    #[tokio::test]
    async fn google_callback_with_mismatched_state_is_bad_request() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .login_with_google(
                CallbackParams {
                    code: Some("abc".to_string()),
                    state: Some("attacker".to_string()),
                    error: None,
                },
                Some("s1".to_string()),
            )
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn google_callback_without_state_cookie_is_bad_request() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        for (state, expected) in [
            (Some("s1".to_string()), None),
            (None, Some("s1".to_string())),
            (None, None),
        ] {
            let response = controller
                .login_with_google(
                    CallbackParams {
                        code: Some("abc".to_string()),
                        state,
                        error: None,
                    },
                    expected,
                )
                .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn signup_requires_google_verified_claims() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller.signup_user(None, valid_body()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn signup_with_email_in_body_is_rejected_by_presenter() {
        let (controller, builds) = user_controller(MockUserRepository::new);

        let response = controller
            .signup_user(Some(claims_for("new@example.com")), valid_body())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Email is included in Request Body" })
        );
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn signup_uses_email_from_claims() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_sign_up()
                .withf(|user| user.email() == "new@example.com" && user.age() == 20)
                .times(1)
                .returning(|_| Ok(SignupOutcome::Created(SessionToken("session".to_string()))));
            repository
        });

        let response = controller
            .signup_user(
                Some(claims_for("new@example.com")),
                bytes(json!({ "name": "natori", "age": 27, "sex": 1, "gender": 1 })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("auth_token=session;"));
    }

    #[tokio::test]
    async fn signup_of_existing_account_is_conflict() {
        let (controller, _) = user_controller(|| {
            let mut repository = MockUserRepository::new();
            repository
                .expect_sign_up()
                .returning(|_| Ok(SignupOutcome::AlreadyRegistered));
            repository
        });

        let response = controller
            .signup_user(
                Some(claims_for("test@example.com")),
                bytes(json!({ "name": "natori" })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}

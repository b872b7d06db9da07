//! Gateway for UserRepository
//!
//! Combines the user table driver, Google OAuth and the token issuer.

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sea_orm::{DbErr, SqlErr};

use super::drivers::{GoogleOAuthDriver, TokenDriver, UserDriver, UserRecord};
use crate::domain::entities::{
    AuthorizationRequest, GoogleLogin, SessionToken, SignupOutcome, User, UserCredentials, UserId,
};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Drivers needed by one user request
pub struct UserDrivers {
    pub users: Box<dyn UserDriver>,
    pub oauth: Box<dyn GoogleOAuthDriver>,
    pub tokens: Box<dyn TokenDriver>,
}

pub struct UserGateway {
    users: Box<dyn UserDriver>,
    oauth: Box<dyn GoogleOAuthDriver>,
    tokens: Box<dyn TokenDriver>,
}

impl UserGateway {
    pub fn new(drivers: UserDrivers) -> Self {
        Self {
            users: drivers.users,
            oauth: drivers.oauth,
            tokens: drivers.tokens,
        }
    }

    fn session_for(&self, user_id: i32, email: &str) -> Result<SessionToken, DomainError> {
        self.tokens
            .issue_session(user_id, email)
            .map_err(|e| DomainError::Internal(format!("Failed to sign session: {}", e)))
    }

    fn signup_token_for(&self, email: &str) -> Result<SessionToken, DomainError> {
        self.tokens
            .issue_signup(email)
            .map_err(|e| DomainError::Internal(format!("Failed to sign signup token: {}", e)))
    }
}

/// Length of the OAuth `state` value
const STATE_LENGTH: usize = 32;

/// Random OAuth `state`, alphanumeric so it is a valid cookie value
fn generate_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Translate driver errors, surfacing the unique email constraint
fn map_db_err(err: DbErr, email: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(format!("User with email {} already exists", email))
        }
        _ => DomainError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserGateway {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let created = self
            .users
            .create_user(UserRecord::from(user))
            .await
            .map_err(|e| map_db_err(e, user.email()))?;

        tracing::debug!(user_id = created.id, "Created user");
        Ok(())
    }

    async fn find_by(&self, credentials: &UserCredentials) -> Result<bool, DomainError> {
        let found = self.users.find_user_by_email(credentials.email()).await?;
        Ok(found.is_some())
    }

    fn generate_auth_url(&self) -> AuthorizationRequest {
        let state = generate_state();
        AuthorizationRequest {
            url: self.oauth.authorization_url(&state),
            state,
        }
    }

    async fn authenticate_google(&self, code: &str) -> Result<GoogleLogin, DomainError> {
        let profile = self.oauth.fetch_profile(code).await.map_err(|e| {
            tracing::warn!("Google sign-in failed: {}", e);
            DomainError::Upstream(e.to_string())
        })?;

        if !profile.email_verified {
            return Err(DomainError::Unauthorized(format!(
                "Google account email {} is not verified",
                profile.email
            )));
        }

        match self.users.find_user_by_email(&profile.email).await? {
            Some(model) => Ok(GoogleLogin::Registered(
                self.session_for(model.id, &model.email)?,
            )),
            None => Ok(GoogleLogin::Unregistered(
                self.signup_token_for(&profile.email)?,
            )),
        }
    }

    async fn sign_up(&self, user: &User) -> Result<SignupOutcome, DomainError> {
        if self.users.find_user_by_email(user.email()).await?.is_some() {
            return Ok(SignupOutcome::AlreadyRegistered);
        }

        match self.users.create_user(UserRecord::from(user)).await {
            Ok(model) => Ok(SignupOutcome::Created(
                self.session_for(model.id, &model.email)?,
            )),
            // Lost a race with a concurrent signup for the same email
            Err(e) => match map_db_err(e, user.email()) {
                DomainError::AlreadyExists(_) => Ok(SignupOutcome::AlreadyRegistered),
                other => Err(other),
            },
        }
    }

    async fn update(&self, id: UserId, user: &User) -> Result<(), DomainError> {
        match self.users.update_user(id.0, UserRecord::from(user)).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                Err(DomainError::NotFound(format!("User {} not found", id)))
            }
            Err(e) => Err(map_db_err(e, user.email())),
        }
    }
}

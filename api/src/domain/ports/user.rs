//! User port traits

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{
    AuthorizationRequest, GoogleLogin, SessionToken, SignupOutcome, User, UserCredentials, UserId,
};
use crate::error::DomainError;

/// User use cases
#[async_trait]
pub trait UserInputPort: Send + Sync {
    /// Persist a new user profile
    async fn create_user(&self, user: &User) -> Result<(), DomainError>;

    /// Check that an email belongs to a registered user
    async fn login_user(&self, credentials: &UserCredentials) -> Result<(), DomainError>;

    /// Present the Google consent URL
    async fn get_auth_url(&self) -> Result<(), DomainError>;

    /// Finish the Google OAuth callback
    async fn login_with_google(&self, code: &str) -> Result<(), DomainError>;

    /// Register the profile of a Google-verified email
    async fn signup_user(&self, user: &User) -> Result<(), DomainError>;

    /// Replace the profile of an existing user
    async fn update_user(&self, id: UserId, user: &User) -> Result<(), DomainError>;
}

/// Persistence and identity-provider operations for users
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Whether a user is registered under the credentials' email
    async fn find_by(&self, credentials: &UserCredentials) -> Result<bool, DomainError>;

    /// Consent URL bound to a fresh random `state`
    fn generate_auth_url(&self) -> AuthorizationRequest;

    /// Exchange an OAuth code and resolve the Google account to a session
    async fn authenticate_google(&self, code: &str) -> Result<GoogleLogin, DomainError>;

    /// Create the user unless the email is taken, issuing a session token
    async fn sign_up(&self, user: &User) -> Result<SignupOutcome, DomainError>;

    async fn update(&self, id: UserId, user: &User) -> Result<(), DomainError>;
}

/// Result presentation for user use cases
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserOutputPort: Send + Sync {
    async fn output_create_result(&self) -> Result<(), DomainError>;

    async fn output_update_result(&self) -> Result<(), DomainError>;

    async fn output_login_result(&self) -> Result<(), DomainError>;

    async fn output_not_registered(&self) -> Result<(), DomainError>;

    async fn output_auth_url(&self, request: &AuthorizationRequest) -> Result<(), DomainError>;

    /// Session established through Google, send the browser into the app
    async fn output_login_with_auth(&self, token: &SessionToken) -> Result<(), DomainError>;

    /// Google account unknown, send the browser to the signup page
    async fn output_redirect_to_signup(&self, token: &SessionToken) -> Result<(), DomainError>;

    async fn output_signup_with_auth(&self, token: &SessionToken) -> Result<(), DomainError>;

    async fn output_already_signedup(&self) -> Result<(), DomainError>;

    async fn output_has_email_in_request_body(&self) -> Result<(), DomainError>;
}

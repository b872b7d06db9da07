//! User interactor
//!
//! Pass-through orchestration: one repository call, then the output port
//! matching the outcome. Repository errors are returned untouched.

use async_trait::async_trait;

use crate::domain::entities::{GoogleLogin, SignupOutcome, User, UserCredentials, UserId};
use crate::domain::ports::{UserInputPort, UserOutputPort, UserRepository};
use crate::error::DomainError;

pub struct UserInteractor {
    repository: Box<dyn UserRepository>,
    output: Box<dyn UserOutputPort>,
}

impl UserInteractor {
    pub fn new(repository: Box<dyn UserRepository>, output: Box<dyn UserOutputPort>) -> Self {
        Self { repository, output }
    }
}

/// Input-port factory handed to the user controller
pub fn new_user_input_port(
    repository: Box<dyn UserRepository>,
    output: Box<dyn UserOutputPort>,
) -> Box<dyn UserInputPort> {
    Box::new(UserInteractor::new(repository, output))
}

#[async_trait]
impl UserInputPort for UserInteractor {
    async fn create_user(&self, user: &User) -> Result<(), DomainError> {
        self.repository.create(user).await?;
        self.output.output_create_result().await
    }

    async fn login_user(&self, credentials: &UserCredentials) -> Result<(), DomainError> {
        if self.repository.find_by(credentials).await? {
            self.output.output_login_result().await
        } else {
            self.output.output_not_registered().await
        }
    }

    async fn get_auth_url(&self) -> Result<(), DomainError> {
        let request = self.repository.generate_auth_url();
        self.output.output_auth_url(&request).await
    }

    async fn login_with_google(&self, code: &str) -> Result<(), DomainError> {
        match self.repository.authenticate_google(code).await? {
            GoogleLogin::Registered(token) => self.output.output_login_with_auth(&token).await,
            GoogleLogin::Unregistered(token) => {
                self.output.output_redirect_to_signup(&token).await
            }
        }
    }

    async fn signup_user(&self, user: &User) -> Result<(), DomainError> {
        match self.repository.sign_up(user).await? {
            SignupOutcome::Created(token) => self.output.output_signup_with_auth(&token).await,
            SignupOutcome::AlreadyRegistered => self.output.output_already_signedup().await,
        }
    }

    async fn update_user(&self, id: UserId, user: &User) -> Result<(), DomainError> {
        self.repository.update(id, user).await?;
        self.output.output_update_result().await
    }
}

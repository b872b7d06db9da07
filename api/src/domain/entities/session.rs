//! Session outcomes shared by the user ports

/// Signed token carried in the auth cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Google consent URL plus the `state` it was issued with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
}

/// Result of completing a Google sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleLogin {
    /// The Google account belongs to a user; the token opens a session
    Registered(SessionToken),
    /// No user has this email yet; the token only carries the verified email
    Unregistered(SessionToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Created(SessionToken),
    AlreadyRegistered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Saved,
    AlreadyFavorited,
}

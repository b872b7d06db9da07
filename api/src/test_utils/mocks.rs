//! Controllers wired for tests
//!
//! Only the repository is mocked. Drivers are inert mocks the repository
//! never touches, while presenters and interactors are the real ones, so a
//! test sees the exact response a request would get. The returned counter
//! records how many times a repository was built.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::adapters::gateway::drivers::{
    MockGoogleMapDriver, MockGoogleOAuthDriver, MockStoreDriver, MockTokenDriver, MockUserDriver,
};
use crate::adapters::gateway::{StoreDrivers, UserDrivers};
use crate::adapters::presenter::{new_store_output_port, new_user_output_port};
use crate::app::{new_store_input_port, new_user_input_port};
use crate::auth::{JwtCodec, SessionState};
use crate::domain::ports::{MockStoreRepository, MockUserRepository, StoreRepository, UserRepository};
use crate::handlers::{StoreController, UserController};
use crate::web::AuthCookies;
use crate::AppState;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_APP_URL: &str = "http://localhost:3000";

pub fn test_cookies() -> AuthCookies {
    AuthCookies::new("auth_token", 600, false)
}

pub fn test_codec() -> JwtCodec {
    JwtCodec::new(TEST_SECRET, 600)
}

pub fn user_controller<F>(repository: F) -> (UserController, Arc<AtomicUsize>)
where
    F: Fn() -> MockUserRepository + Send + Sync + 'static,
{
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();

    let controller = UserController::new(
        Arc::new(|| UserDrivers {
            users: Box::new(MockUserDriver::new()),
            oauth: Box::new(MockGoogleOAuthDriver::new()),
            tokens: Box::new(MockTokenDriver::new()),
        }),
        Arc::new(|ctx| new_user_output_port(ctx, test_cookies(), TEST_APP_URL.to_string())),
        Arc::new(new_user_input_port),
        Arc::new(move |_: UserDrivers| -> Box<dyn UserRepository> {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::new(repository())
        }),
    );

    (controller, builds)
}

pub fn store_controller<F>(repository: F) -> (StoreController, Arc<AtomicUsize>)
where
    F: Fn() -> MockStoreRepository + Send + Sync + 'static,
{
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();

    let controller = StoreController::new(
        Arc::new(|| StoreDrivers {
            stores: Box::new(MockStoreDriver::new()),
            maps: Box::new(MockGoogleMapDriver::new()),
        }),
        Arc::new(new_store_output_port),
        Arc::new(new_store_input_port),
        Arc::new(move |_: StoreDrivers| -> Box<dyn StoreRepository> {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::new(repository())
        }),
    );

    (controller, builds)
}

pub fn test_state(users: UserController, stores: StoreController) -> AppState {
    AppState {
        users,
        stores,
        session: SessionState {
            cookies: test_cookies(),
            codec: test_codec(),
        },
    }
}

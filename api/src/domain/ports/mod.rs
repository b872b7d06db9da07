//! Domain ports (traits)
//!
//! Each aggregate has three port families:
//! - input ports, the use-case entry points called by controllers
//! - output ports, the result callbacks implemented by presenters
//! - repositories, implemented by the gateway adapters
//!
//! None of them mention HTTP types, so interactors can be driven by mocks.

pub mod store;
pub mod user;

pub use store::{StoreInputPort, StoreOutputPort, StoreRepository};
pub use user::{UserInputPort, UserOutputPort, UserRepository};

#[cfg(test)]
pub use store::{MockStoreOutputPort, MockStoreRepository};
#[cfg(test)]
pub use user::{MockUserOutputPort, MockUserRepository};

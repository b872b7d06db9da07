//! Application layer
//!
//! Interactors implementing the input ports. Each one is built per request
//! around a single repository and a single output port.

pub mod store_interactor;
pub mod user_interactor;

pub use store_interactor::new_store_input_port;
pub use user_interactor::new_user_input_port;

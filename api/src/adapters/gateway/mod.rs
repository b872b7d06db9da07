//! Gateway adapters
//!
//! Repository implementations built from per-request drivers.

pub mod drivers;
pub mod store_repo;
pub mod user_repo;

pub use store_repo::{StoreDrivers, StoreGateway};
pub use user_repo::{UserDrivers, UserGateway};

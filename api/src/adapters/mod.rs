//! Adapters layer
//!
//! Gateways implementing the repository ports, the drivers they sit on,
//! and the presenters implementing the output ports.

pub mod gateway;
pub mod google;
pub mod postgres;
pub mod presenter;

pub use gateway::{StoreDrivers, StoreGateway, UserDrivers, UserGateway};
pub use google::{GoogleOAuthClient, GoogleOAuthSettings, GooglePlacesDriver, SearchArea};
pub use postgres::{ensure_schema, PostgresStoreDriver, PostgresUserDriver};

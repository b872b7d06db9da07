//! PostgreSQL adapters
//!
//! Driver implementations using SeaORM and PostgreSQL.

pub mod schema;
pub mod store_driver;
pub mod user_driver;


pub use schema::ensure_schema;
pub use store_driver::PostgresStoreDriver;
pub use user_driver::PostgresUserDriver;

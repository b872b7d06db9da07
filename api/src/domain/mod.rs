//! Domain layer
//!
//! Contains pure business logic with no framework dependencies.
//! - `entities`: Self-validating domain records
//! - `ports`: Input, output and repository traits for each aggregate
//! - `validation`: Combinable validation errors

pub mod entities;
pub mod ports;
pub mod validation;

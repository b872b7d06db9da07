//! Test utilities
//!
//! Fixtures for domain values and rows, plus controllers wired to mock
//! repositories with every other collaborator real.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

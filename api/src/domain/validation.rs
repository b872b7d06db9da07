//! Combinable validation errors
//!
//! Every check appends to the same collection so a caller sees all
//! violations at once, not just the first.

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .0.join("\n"))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Record `message` when `failed` holds
    pub fn check(&mut self, failed: bool, message: impl Into<String>) {
        if failed {
            self.push(message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// `Ok(value)` when nothing was recorded, the collected errors otherwise
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

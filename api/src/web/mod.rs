//! Per-request web plumbing shared by controllers and presenters

pub mod context;
pub mod cookie;

pub use context::WebContext;
pub use cookie::AuthCookies;

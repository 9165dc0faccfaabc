//! Endpoint descriptor: the closed set of API calls and the traits that map
//! each of them onto an HTTP request shape.

pub mod endpoint;
pub mod target;

pub use endpoint::*;
pub use target::*;

/// Base URL the mobile app targets when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

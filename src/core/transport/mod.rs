//! Transport layer for the bridge.
//!
//! The bridge is served over HTTP only: an axum router exposes tool listing
//! and tool calls as REST-style endpoints and translates dispatch failures
//! into problem responses.

mod config;
mod error;
pub mod http;
mod problem;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
pub use problem::ProblemDetails;

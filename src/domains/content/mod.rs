//! Content domain module.
//!
//! This module defines how the server obtains content details from an
//! external content repository (SenseNet). Tools depend only on the
//! [`ContentService`] trait, so the backing implementation is chosen once at
//! wiring time.
//!
//! ## Architecture
//!
//! - `service.rs` - The `ContentService` trait consumed by tools
//! - `mock.rs` - Deterministic stand-in used until the real client exists
//! - `error.rs` - Content service error types

mod error;
mod mock;
mod service;

pub use error::ContentServiceError;
pub use mock::MockContentService;
pub use service::ContentService;

//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! bridge:
//! - **tools**: tools that clients list and call
//! - **content**: access to the SenseNet content repository

pub mod content;
pub mod tools;

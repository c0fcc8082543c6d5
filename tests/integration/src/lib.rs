//! Integration test utilities
//!
//! This crate runs JSON request bodies end-to-end through the services and
//! the in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

//! Storage traits for the client registry.
//!
//! # Implementations
//!
//! Storage implementations are provided in separate crates:
//!
//! - `oxauth-registry-memory` - in-memory backend for tests and development

pub mod client;

pub use client::ClientStore;

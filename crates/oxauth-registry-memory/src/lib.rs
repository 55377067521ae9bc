//! In-memory storage backends for the OxAuth client registry.
//!
//! This crate provides in-memory implementations of the `ClientStore` and
//! `CacheBackend` traits from `oxauth-registry`, for tests and local
//! development. The cache backend models the hash-namespace semantics of a
//! Redis-style store, including the rule that a namespace key exists only
//! while it holds at least one field.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use oxauth_registry::{CachedClientService, JsonClientCodec, NoopSecretEncoder, RegistryConfig};
//! use oxauth_registry_memory::{InMemoryCacheBackend, InMemoryClientStore};
//!
//! let service = CachedClientService::new(
//!     Arc::new(InMemoryClientStore::new()),
//!     Arc::new(InMemoryCacheBackend::new()),
//!     Arc::new(JsonClientCodec),
//!     Arc::new(NoopSecretEncoder),
//!     RegistryConfig::default(),
//! );
//! ```

mod cache;
mod client;

pub use cache::InMemoryCacheBackend;
pub use client::InMemoryClientStore;

//! # oxauth-registry
//!
//! Cached OAuth 2.0 client registry for the OxAuth authorization server.
//!
//! This crate provides the caching layer that sits in front of the
//! authoritative client-registry store. Client lookup is on the hot path of
//! every token request, so records are served read-through from a
//! hash-addressed cache while administrative writes go to the store and are
//! propagated write-through.
//!
//! ## Modules
//!
//! - [`service`] - read-through/write-through cached lookup service
//! - [`authkey`] - authentication key derivation for stored grants
//! - [`storage`] - authoritative client store trait
//! - [`cache`] - cache backing store trait
//! - [`codec`] - client record serialization for cache storage
//! - [`secret`] - injected client-secret encoding policy
//! - [`config`] - registry configuration
//! - [`error`] - error taxonomy and OAuth error details

pub mod authkey;
pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod secret;
pub mod service;
pub mod storage;
pub mod types;

pub use authkey::{AuthenticationKeyGenerator, authentication_attributes};
pub use cache::CacheBackend;
pub use codec::{ClientCodec, JsonClientCodec};
pub use config::{ConfigError, RegistryConfig};
pub use error::{OAuthErrorDetails, RegistryError};
pub use secret::{NoopSecretEncoder, SecretEncoder, Sha256SecretEncoder};
pub use service::CachedClientService;
pub use storage::ClientStore;
pub use types::Client;

/// Type alias for client registry results.
pub type RegistryResult<T> = Result<T, RegistryError>;

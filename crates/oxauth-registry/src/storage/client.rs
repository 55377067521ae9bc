//! Client store trait.
//!
//! Defines the interface to the authoritative persistent client registry.
//! Implementations are provided by storage backends; the registry core only
//! consumes this interface and never treats the cache as authoritative.

use async_trait::async_trait;

use crate::RegistryResult;
use crate::types::Client;

/// Authoritative storage for OAuth 2.0 client registrations.
///
/// The store is the sole source of truth for client existence. All
/// administrative mutations go through this trait; the cache in front of it
/// is a disposable projection.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Finds a client by its OAuth client_id.
    ///
    /// Returns `None` if no client with that id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_client_id(&self, client_id: &str) -> RegistryResult<Option<Client>>;

    /// Lists all registered clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn list_all(&self) -> RegistryResult<Vec<Client>>;

    /// Registers a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A client with the same id already exists (`ClientExists`)
    /// - The storage operation fails
    async fn insert(&self, client: &Client) -> RegistryResult<()>;

    /// Updates an existing client.
    ///
    /// The stored secret is not touched by this operation; use
    /// [`update_secret`](Self::update_secret) instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client doesn't exist (`ClientNotFound`)
    /// - The storage operation fails
    async fn update(&self, client: &Client) -> RegistryResult<()>;

    /// Replaces the stored secret for a client.
    ///
    /// The secret passed here is already encoded; the store persists it
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client doesn't exist (`ClientNotFound`)
    /// - The storage operation fails
    async fn update_secret(&self, client_id: &str, encoded_secret: &str) -> RegistryResult<()>;

    /// Deletes a client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client doesn't exist (`ClientNotFound`)
    /// - The storage operation fails
    async fn delete(&self, client_id: &str) -> RegistryResult<()>;
}

//! Cached client lookup service.
//!
//! Orchestrates read-through lookup, write-through propagation, eviction,
//! and one-time bulk preload over an authoritative [`ClientStore`] and a
//! hash-addressed [`CacheBackend`].
//!
//! # Consistency
//!
//! The store is the sole source of truth. The cached copy is a disposable
//! projection: created lazily on first read-through miss, refreshed on every
//! store write this service observes, deleted on store deletion. No
//! cross-process transaction links the two; the window between a store write
//! and the following cache write is accepted. Store failures propagate to
//! the caller unmodified; cache failures are logged and treated as "act as
//! if there were no cache".
//!
//! The service holds no in-process locks and spawns no background work.
//! Concurrent callers may race on the preload guard; that is acceptable
//! because the racing writes are idempotent overwrites of the same values.

use std::sync::Arc;

use crate::RegistryResult;
use crate::cache::CacheBackend;
use crate::codec::ClientCodec;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::secret::SecretEncoder;
use crate::storage::ClientStore;
use crate::types::Client;

/// Read-through/write-through cache over the authoritative client store.
pub struct CachedClientService {
    store: Arc<dyn ClientStore>,
    cache: Arc<dyn CacheBackend>,
    codec: Arc<dyn ClientCodec>,
    secret_encoder: Arc<dyn SecretEncoder>,
    config: RegistryConfig,
}

impl CachedClientService {
    /// Creates a new cached client service.
    #[must_use]
    pub fn new(
        store: Arc<dyn ClientStore>,
        cache: Arc<dyn CacheBackend>,
        codec: Arc<dyn ClientCodec>,
        secret_encoder: Arc<dyn SecretEncoder>,
        config: RegistryConfig,
    ) -> Self {
        Self {
            store,
            cache,
            codec,
            secret_encoder,
            config,
        }
    }

    /// Resolves a client by id, cache first.
    ///
    /// An unreadable or unavailable cache entry is treated as a miss and the
    /// lookup falls through to the store. A store hit is written back to the
    /// cache best-effort before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `client_id` is blank (`InvalidClientId`)
    /// - No such client exists in the store (`ClientNotFound`)
    /// - The store operation fails
    pub async fn load_client(&self, client_id: &str) -> RegistryResult<Client> {
        if client_id.trim().is_empty() {
            return Err(RegistryError::InvalidClientId);
        }

        if let Some(client) = self.read_cached(client_id).await {
            return Ok(client);
        }

        match self.store.find_by_client_id(client_id).await? {
            Some(client) => {
                self.write_through(&client).await;
                Ok(client)
            }
            None => Err(RegistryError::client_not_found(client_id)),
        }
    }

    /// Registers a new client in the store.
    ///
    /// The cache is not written here; the record is cached lazily on the
    /// first read-through lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client id is blank (`InvalidClientId`)
    /// - The id is already registered (`ClientExists`)
    /// - The store operation fails
    pub async fn insert_client(&self, client: &Client) -> RegistryResult<()> {
        client.validate()?;
        self.store.insert(client).await
    }

    /// Updates a client in the store and writes the new record through to
    /// the cache.
    ///
    /// Write-through rather than invalidate-only, so readers immediately
    /// observe the new value instead of refetching from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client id is blank (`InvalidClientId`)
    /// - The client doesn't exist (`ClientNotFound`)
    /// - The store operation fails
    pub async fn update_client(&self, client: &Client) -> RegistryResult<()> {
        client.validate()?;
        self.store.update(client).await?;
        self.write_through(client).await;
        Ok(())
    }

    /// Replaces a client's secret in the store and refreshes the cache.
    ///
    /// The raw secret is transformed with the injected [`SecretEncoder`]
    /// before it reaches the store. The authoritative record is re-read
    /// after the secret write; if that re-read finds the client, the cached
    /// copy is overwritten with the freshly encoded secret applied. If the
    /// re-read returns nothing the cache is left untouched. The secret
    /// write and the re-read are not atomic; the window is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client doesn't exist (`ClientNotFound`)
    /// - The store operation fails
    pub async fn update_client_secret(
        &self,
        client_id: &str,
        secret: &str,
    ) -> RegistryResult<()> {
        let encoded = self.secret_encoder.encode(secret);
        self.store.update_secret(client_id, &encoded).await?;

        if let Some(mut client) = self.store.find_by_client_id(client_id).await? {
            client.client_secret = Some(encoded);
            self.write_through(&client).await;
        }
        Ok(())
    }

    /// Deletes a client from the store and evicts it from the cache.
    ///
    /// The cache field is deleted unconditionally after a successful store
    /// delete, regardless of whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client doesn't exist (`ClientNotFound`)
    /// - The store operation fails
    pub async fn remove_client(&self, client_id: &str) -> RegistryResult<()> {
        self.store.delete(client_id).await?;

        if let Err(e) = self
            .cache
            .hash_delete(&self.config.cache_namespace, client_id)
            .await
        {
            tracing::warn!(client_id = %client_id, error = %e, "Failed to evict client from cache");
        }
        Ok(())
    }

    /// Lists all registered clients, always from the authoritative store.
    ///
    /// After fetching, runs the one-time bulk preload: if the cache
    /// namespace key does not exist yet and the list is non-empty, every
    /// record is written through. If the namespace already exists the
    /// preload is skipped entirely, so list-time snapshots never overwrite
    /// fresher per-record writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails. Preload failures do
    /// not affect the returned list.
    pub async fn list_clients(&self) -> RegistryResult<Vec<Client>> {
        let clients = self.store.list_all().await?;
        self.preload_cache(&clients).await;
        Ok(clients)
    }

    /// Reads and decodes the cached record for a client id.
    ///
    /// Any cache or codec failure is logged and reported as a miss.
    async fn read_cached(&self, client_id: &str) -> Option<Client> {
        let raw = match self
            .cache
            .hash_get(&self.config.cache_namespace, client_id)
            .await
        {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!(client_id = %client_id, error = %e, "Cache read failed, falling through to store");
                return None;
            }
        };

        match self.codec.decode(&raw) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(client_id = %client_id, error = %e, "Cached client entry unreadable, treating as miss");
                None
            }
        }
    }

    /// Writes a record into the cache, best-effort.
    async fn write_through(&self, client: &Client) {
        let encoded = match self.codec.encode(client) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(client_id = %client.client_id, error = %e, "Failed to encode client for cache");
                return;
            }
        };

        if let Err(e) = self
            .cache
            .hash_put(&self.config.cache_namespace, &client.client_id, &encoded)
            .await
        {
            tracing::warn!(client_id = %client.client_id, error = %e, "Failed to write client through to cache");
        }
    }

    /// One-time bulk preload guard.
    ///
    /// The existence-check-then-write sequence is not atomic; concurrent
    /// callers on a cold cache may both preload, which is harmless.
    async fn preload_cache(&self, clients: &[Client]) {
        let namespace = &self.config.cache_namespace;

        let exists = match self.cache.namespace_exists(namespace).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(error = %e, "Cache existence check failed, skipping preload");
                return;
            }
        };
        if exists {
            tracing::debug!(namespace = %namespace, "Client cache already populated, skipping preload");
            return;
        }
        if clients.is_empty() {
            return;
        }

        for client in clients {
            self.write_through(client).await;
        }
        tracing::debug!(namespace = %namespace, count = clients.len(), "Preloaded client registry into cache");
    }
}

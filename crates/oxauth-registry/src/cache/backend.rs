//! Cache backend trait.
//!
//! Models a distributed key-value hash structure addressed by a namespace
//! key with per-field operations, the shape Redis exposes for hashes. The
//! namespace is a shared, unowned resource; any process may evict or
//! overwrite a field at any time without coordination.

use async_trait::async_trait;

use crate::RegistryResult;

/// Hash-addressed cache backing store.
///
/// All cached client records live in one logical hash container keyed by a
/// fixed namespace string, field-addressed by client id. Existence of the
/// namespace key itself (independent of its fields) is used as the sentinel
/// for "bulk preload already performed".
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Reads one field from the namespace hash.
    ///
    /// Returns `None` if the namespace or the field does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable.
    async fn hash_get(&self, namespace: &str, field: &str) -> RegistryResult<Option<String>>;

    /// Writes one field into the namespace hash, creating the namespace if
    /// it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable.
    async fn hash_put(&self, namespace: &str, field: &str, value: &str) -> RegistryResult<()>;

    /// Deletes one field from the namespace hash.
    ///
    /// Deleting an absent field is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable.
    async fn hash_delete(&self, namespace: &str, field: &str) -> RegistryResult<()>;

    /// Checks whether the namespace key itself exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable.
    async fn namespace_exists(&self, namespace: &str) -> RegistryResult<bool>;
}

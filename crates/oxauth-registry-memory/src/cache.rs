//! In-memory cache backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use oxauth_registry::{CacheBackend, RegistryError, RegistryResult};

/// In-memory implementation of the hash-addressed cache backend.
///
/// Follows Redis hash semantics: a namespace key exists only while it holds
/// at least one field, and deleting the last field removes the key itself.
/// An unavailability toggle lets tests exercise the fall-through paths of
/// the cached service.
#[derive(Debug, Default)]
pub struct InMemoryCacheBackend {
    namespaces: RwLock<HashMap<String, HashMap<String, String>>>,
    unavailable: AtomicBool,
}

impl InMemoryCacheBackend {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every cache operation fail until re-enabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Returns the number of fields in a namespace.
    pub async fn field_count(&self, namespace: &str) -> usize {
        self.namespaces
            .read()
            .await
            .get(namespace)
            .map_or(0, HashMap::len)
    }

    fn check_available(&self) -> RegistryResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RegistryError::cache("cache backend unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for InMemoryCacheBackend {
    async fn hash_get(&self, namespace: &str, field: &str) -> RegistryResult<Option<String>> {
        self.check_available()?;
        Ok(self
            .namespaces
            .read()
            .await
            .get(namespace)
            .and_then(|fields| fields.get(field).cloned()))
    }

    async fn hash_put(&self, namespace: &str, field: &str, value: &str) -> RegistryResult<()> {
        self.check_available()?;
        self.namespaces
            .write()
            .await
            .entry(namespace.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn hash_delete(&self, namespace: &str, field: &str) -> RegistryResult<()> {
        self.check_available()?;
        let mut namespaces = self.namespaces.write().await;
        if let Some(fields) = namespaces.get_mut(namespace) {
            fields.remove(field);
            if fields.is_empty() {
                namespaces.remove(namespace);
            }
        }
        Ok(())
    }

    async fn namespace_exists(&self, namespace: &str) -> RegistryResult<bool> {
        self.check_available()?;
        Ok(self.namespaces.read().await.contains_key(namespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete() {
        let cache = InMemoryCacheBackend::new();
        assert!(cache.hash_get("ns", "a").await.unwrap().is_none());

        cache.hash_put("ns", "a", "1").await.unwrap();
        assert_eq!(cache.hash_get("ns", "a").await.unwrap().as_deref(), Some("1"));

        cache.hash_delete("ns", "a").await.unwrap();
        assert!(cache.hash_get("ns", "a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_namespace_exists_follows_fields() {
        let cache = InMemoryCacheBackend::new();
        assert!(!cache.namespace_exists("ns").await.unwrap());

        cache.hash_put("ns", "a", "1").await.unwrap();
        assert!(cache.namespace_exists("ns").await.unwrap());

        // Deleting the last field removes the namespace key itself.
        cache.hash_delete("ns", "a").await.unwrap();
        assert!(!cache.namespace_exists("ns").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_absent_field_is_ok() {
        let cache = InMemoryCacheBackend::new();
        cache.hash_delete("ns", "missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_unavailable_toggle() {
        let cache = InMemoryCacheBackend::new();
        cache.hash_put("ns", "a", "1").await.unwrap();

        cache.set_unavailable(true);
        assert!(matches!(
            cache.hash_get("ns", "a").await.unwrap_err(),
            RegistryError::Cache { .. }
        ));
        assert!(cache.namespace_exists("ns").await.is_err());

        cache.set_unavailable(false);
        assert_eq!(cache.hash_get("ns", "a").await.unwrap().as_deref(), Some("1"));
    }
}

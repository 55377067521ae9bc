//! In-memory client store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use oxauth_registry::types::Client;
use oxauth_registry::{ClientStore, RegistryError, RegistryResult};

/// In-memory implementation of the authoritative client store.
///
/// Backed by a `tokio::sync::RwLock` over a `HashMap` keyed by client id.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    clients: RwLock<HashMap<String, Client>>,
}

impl InMemoryClientStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given clients.
    #[must_use]
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let map = clients
            .into_iter()
            .map(|c| (c.client_id.clone(), c))
            .collect();
        Self {
            clients: RwLock::new(map),
        }
    }

    /// Returns the number of registered clients.
    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Returns `true` if no clients are registered.
    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn find_by_client_id(&self, client_id: &str) -> RegistryResult<Option<Client>> {
        Ok(self.clients.read().await.get(client_id).cloned())
    }

    async fn list_all(&self) -> RegistryResult<Vec<Client>> {
        let mut all: Vec<Client> = self.clients.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.client_id.cmp(&b.client_id));
        Ok(all)
    }

    async fn insert(&self, client: &Client) -> RegistryResult<()> {
        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.client_id) {
            return Err(RegistryError::client_exists(&client.client_id));
        }
        clients.insert(client.client_id.clone(), client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> RegistryResult<()> {
        let mut clients = self.clients.write().await;
        match clients.get_mut(&client.client_id) {
            Some(existing) => {
                // The stored secret survives a metadata update.
                let secret = existing.client_secret.clone();
                *existing = client.clone();
                existing.client_secret = secret;
                Ok(())
            }
            None => Err(RegistryError::client_not_found(&client.client_id)),
        }
    }

    async fn update_secret(&self, client_id: &str, encoded_secret: &str) -> RegistryResult<()> {
        let mut clients = self.clients.write().await;
        match clients.get_mut(client_id) {
            Some(client) => {
                client.client_secret = Some(encoded_secret.to_string());
                Ok(())
            }
            None => Err(RegistryError::client_not_found(client_id)),
        }
    }

    async fn delete(&self, client_id: &str) -> RegistryResult<()> {
        let mut clients = self.clients.write().await;
        match clients.remove(client_id) {
            Some(_) => Ok(()),
            None => Err(RegistryError::client_not_found(client_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryClientStore::new();
        store.insert(&Client::new("web-app")).await.unwrap();

        let found = store.find_by_client_id("web-app").await.unwrap();
        assert_eq!(found.unwrap().client_id, "web-app");
        assert!(store.find_by_client_id("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_fails() {
        let store = InMemoryClientStore::new();
        store.insert(&Client::new("web-app")).await.unwrap();
        let err = store.insert(&Client::new("web-app")).await.unwrap_err();
        assert!(matches!(err, RegistryError::ClientExists { .. }));
    }

    #[tokio::test]
    async fn test_update_preserves_secret() {
        let mut client = Client::new("web-app");
        client.client_secret = Some("stored".to_string());
        let store = InMemoryClientStore::with_clients([client]);

        let mut updated = Client::new("web-app");
        updated.scopes = vec!["read".to_string()];
        updated.client_secret = Some("should-be-ignored".to_string());
        store.update(&updated).await.unwrap();

        let found = store.find_by_client_id("web-app").await.unwrap().unwrap();
        assert_eq!(found.scopes, vec!["read".to_string()]);
        assert_eq!(found.client_secret.as_deref(), Some("stored"));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let store = InMemoryClientStore::new();
        let err = store.update(&Client::new("ghost")).await.unwrap_err();
        assert!(matches!(err, RegistryError::ClientNotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_secret() {
        let store = InMemoryClientStore::with_clients([Client::new("web-app")]);
        store.update_secret("web-app", "encoded").await.unwrap();

        let found = store.find_by_client_id("web-app").await.unwrap().unwrap();
        assert_eq!(found.client_secret.as_deref(), Some("encoded"));

        let err = store.update_secret("ghost", "x").await.unwrap_err();
        assert!(matches!(err, RegistryError::ClientNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryClientStore::with_clients([Client::new("web-app")]);
        store.delete("web-app").await.unwrap();
        assert!(store.is_empty().await);

        let err = store.delete("web-app").await.unwrap_err();
        assert!(matches!(err, RegistryError::ClientNotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_all_sorted() {
        let store = InMemoryClientStore::with_clients([
            Client::new("zeta"),
            Client::new("alpha"),
            Client::new("mid"),
        ]);
        let ids: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.client_id)
            .collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }
}

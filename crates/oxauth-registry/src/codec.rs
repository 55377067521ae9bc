//! Client record codec.
//!
//! Serializes client records to and from the transport-neutral string
//! representation stored in the cache. The default codec is JSON.

use crate::error::RegistryError;
use crate::types::Client;
use crate::RegistryResult;

/// Round-trip-safe serialization of client records for cache storage.
pub trait ClientCodec: Send + Sync {
    /// Encodes a client record to its cache string form.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Codec` if the record cannot be serialized.
    fn encode(&self, client: &Client) -> RegistryResult<String>;

    /// Decodes a client record from its cache string form.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Codec` if the value cannot be parsed.
    fn decode(&self, raw: &str) -> RegistryResult<Client>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonClientCodec;

impl ClientCodec for JsonClientCodec {
    fn encode(&self, client: &Client) -> RegistryResult<String> {
        serde_json::to_string(client).map_err(|e| RegistryError::codec(e.to_string()))
    }

    fn decode(&self, raw: &str) -> RegistryResult<Client> {
        serde_json::from_str(raw).map_err(|e| RegistryError::codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_is_lossless() {
        let mut client = Client::new("web-app");
        client.client_secret = Some("s3cr3t".to_string());
        client.scopes = vec!["read".to_string()];
        client.access_token_validity = Some(1800);

        let codec = JsonClientCodec;
        let encoded = codec.encode(&client).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, client);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let codec = JsonClientCodec;
        let err = codec.decode("not json at all").unwrap_err();
        assert!(matches!(err, RegistryError::Codec { .. }));
    }
}

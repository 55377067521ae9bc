//! Client registry configuration.

use serde::{Deserialize, Serialize};

/// Default cache namespace key holding all cached client records.
pub const DEFAULT_CACHE_NAMESPACE: &str = "oauth:client:details";

/// Default length of the random alphabetic suffix appended to
/// authentication keys.
pub const DEFAULT_KEY_SUFFIX_LENGTH: usize = 8;

/// Configuration for the cached client registry.
///
/// # Example (TOML)
///
/// ```toml
/// [registry]
/// cache_namespace = "oauth:client:details"
/// key_suffix_length = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Namespace key of the cache hash holding all client records.
    pub cache_namespace: String,

    /// Length of the random suffix appended to derived authentication keys.
    pub key_suffix_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cache_namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
            key_suffix_length: DEFAULT_KEY_SUFFIX_LENGTH,
        }
    }
}

impl RegistryConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache namespace is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_namespace.trim().is_empty() {
            return Err(ConfigError::EmptyCacheNamespace);
        }
        Ok(())
    }
}

/// Errors in the registry configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The cache namespace must not be empty.
    #[error("cache_namespace must not be empty")]
    EmptyCacheNamespace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.cache_namespace, "oauth:client:details");
        assert_eq!(config.key_suffix_length, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"cache_namespace":"clients"}"#).unwrap();
        assert_eq!(config.cache_namespace, "clients");
        assert_eq!(config.key_suffix_length, DEFAULT_KEY_SUFFIX_LENGTH);
    }

    #[test]
    fn test_validate_empty_namespace() {
        let config = RegistryConfig {
            cache_namespace: "  ".to_string(),
            ..RegistryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCacheNamespace)
        ));
    }
}

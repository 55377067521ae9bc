//! Client secret encoding.
//!
//! The encoding policy is injected into the secret-update operation rather
//! than read from global state, so it stays swappable and testable. The
//! registry core treats encoded secrets as opaque strings.

/// Transforms a raw client secret into its stored form.
pub trait SecretEncoder: Send + Sync {
    /// Encodes a raw secret for storage.
    fn encode(&self, raw: &str) -> String;
}

/// Pass-through encoder that stores secrets verbatim.
///
/// Matches deployments where secret hashing happens upstream of the
/// registry, or legacy registries with plain stored secrets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSecretEncoder;

impl SecretEncoder for NoopSecretEncoder {
    fn encode(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// SHA-256 encoder producing hex-encoded digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256SecretEncoder;

impl SecretEncoder for Sha256SecretEncoder {
    fn encode(&self, raw: &str) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_is_identity() {
        assert_eq!(NoopSecretEncoder.encode("s3cr3t"), "s3cr3t");
    }

    #[test]
    fn test_sha256_is_stable_hex() {
        let a = Sha256SecretEncoder.encode("s3cr3t");
        let b = Sha256SecretEncoder.encode("s3cr3t");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, Sha256SecretEncoder.encode("other"));
    }
}

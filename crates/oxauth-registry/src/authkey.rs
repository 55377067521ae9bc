//! Authentication key derivation.
//!
//! Computes the identity used to address a stored authorization grant from
//! the attributes of the authentication request. The deterministic component
//! is a SHA-256 digest over the sorted attribute mapping; a fixed-length
//! random alphabetic suffix is appended fresh on every call.
//!
//! Because the suffix is random per call, two identical requests never
//! derive the same key: every authentication event gets its own stored
//! grant record. Storage growth is bounded only by the grant store's own
//! expiry, and revoking all grants for one logical identity requires
//! enumerating the keys sharing its deterministic prefix.

use std::collections::HashMap;

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::config::DEFAULT_KEY_SUFFIX_LENGTH;

/// Attribute name for the client id.
pub const CLIENT_ID: &str = "client_id";
/// Attribute name for the authenticated principal.
pub const USERNAME: &str = "username";
/// Attribute name for the requested scope set.
pub const SCOPE: &str = "scope";

/// Derives authentication keys from request attributes.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationKeyGenerator {
    suffix_length: usize,
}

impl Default for AuthenticationKeyGenerator {
    fn default() -> Self {
        Self {
            suffix_length: DEFAULT_KEY_SUFFIX_LENGTH,
        }
    }
}

impl AuthenticationKeyGenerator {
    /// Creates a generator with the given random suffix length.
    #[must_use]
    pub fn new(suffix_length: usize) -> Self {
        Self { suffix_length }
    }

    /// Derives a key from the attribute mapping.
    ///
    /// The deterministic prefix is order-independent over the attributes;
    /// the suffix is drawn fresh on every call, so repeated calls with
    /// identical attributes always produce distinct keys.
    #[must_use]
    pub fn generate_key(&self, values: &HashMap<String, String>) -> String {
        format!(
            "{}{}",
            Self::digest(values),
            random_alphabetic(self.suffix_length)
        )
    }

    /// Computes the deterministic component of the key: the hex SHA-256
    /// digest of the attributes canonicalized as sorted `key=value` pairs
    /// joined with `&`.
    #[must_use]
    pub fn digest(values: &HashMap<String, String>) -> String {
        let mut pairs: Vec<(&String, &String)> = values.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let canonical = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Builds the standard attribute mapping for a token request.
///
/// Scopes are sorted before joining so that scope order never affects the
/// derived key.
#[must_use]
pub fn authentication_attributes(
    client_id: &str,
    username: Option<&str>,
    scopes: &[String],
) -> HashMap<String, String> {
    let mut values = HashMap::new();
    values.insert(CLIENT_ID.to_string(), client_id.to_string());
    if let Some(username) = username {
        values.insert(USERNAME.to_string(), username.to_string());
    }
    let mut sorted = scopes.to_vec();
    sorted.sort();
    values.insert(SCOPE.to_string(), sorted.join(" "));
    values
}

/// Returns a random string of ASCII letters of the given length.
fn random_alphabetic(len: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

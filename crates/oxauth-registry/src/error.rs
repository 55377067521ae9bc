//! Client registry error types.
//!
//! This module defines all error types that can occur during client registry
//! and cache operations, plus the plain-data carrier used when rendering
//! errors into OAuth 2.0 protocol responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Errors that can occur during client registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The supplied client id was empty or blank.
    #[error("Client id must not be blank")]
    InvalidClientId,

    /// No client with the given id exists in the authoritative store.
    #[error("No client registered with id: {client_id}")]
    ClientNotFound {
        /// The client id that was looked up.
        client_id: String,
    },

    /// A client with the given id is already registered.
    #[error("Client already exists: {client_id}")]
    ClientExists {
        /// The conflicting client id.
        client_id: String,
    },

    /// A client record could not be encoded or decoded.
    ///
    /// On the read-through path this is never surfaced to callers; an
    /// unreadable cache entry is treated as a miss.
    #[error("Codec error: {message}")]
    Codec {
        /// Description of the codec failure.
        message: String,
    },

    /// The authoritative client store failed at the transport level.
    #[error("Client store error: {message}")]
    Store {
        /// Description of the store failure.
        message: String,
    },

    /// The cache backing store failed at the transport level.
    #[error("Cache backend error: {message}")]
    Cache {
        /// Description of the cache failure.
        message: String,
    },
}

impl RegistryError {
    /// Creates a new `ClientNotFound` error.
    #[must_use]
    pub fn client_not_found(client_id: impl Into<String>) -> Self {
        Self::ClientNotFound {
            client_id: client_id.into(),
        }
    }

    /// Creates a new `ClientExists` error.
    #[must_use]
    pub fn client_exists(client_id: impl Into<String>) -> Self {
        Self::ClientExists {
            client_id: client_id.into(),
        }
    }

    /// Creates a new `Codec` error.
    #[must_use]
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }

    /// Creates a new `Store` error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Creates a new `Cache` error.
    #[must_use]
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Returns the OAuth 2.0 error code for this error.
    #[must_use]
    pub fn oauth_error_code(&self) -> &'static str {
        match self {
            Self::InvalidClientId => "invalid_request",
            Self::ClientNotFound { .. } => "invalid_client",
            Self::ClientExists { .. } => "invalid_request",
            Self::Codec { .. } | Self::Store { .. } | Self::Cache { .. } => "server_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidClientId | Self::ClientExists { .. } => 400,
            Self::ClientNotFound { .. } => 401,
            Self::Codec { .. } | Self::Store { .. } | Self::Cache { .. } => 500,
        }
    }

    /// Returns `true` if this is a client error (4xx category).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidClientId | Self::ClientNotFound { .. } | Self::ClientExists { .. }
        )
    }

    /// Returns `true` if this is a server error (5xx category).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Codec { .. } | Self::Store { .. } | Self::Cache { .. }
        )
    }
}

// =============================================================================
// OAuth Error Details
// =============================================================================

/// Plain-data carrier for an OAuth 2.0 protocol error.
///
/// Holds the error code, HTTP status, description, and additional-info
/// mapping as data so that response formatting is a pure function over the
/// fields rather than behavior attached to an error type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthErrorDetails {
    /// OAuth 2.0 `error` parameter value.
    pub error_code: String,

    /// HTTP status code to return with the error.
    pub http_status: u16,

    /// Human-readable `error_description` value.
    pub description: String,

    /// Additional key/value pairs to include in the error body.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_information: BTreeMap<String, String>,
}

impl OAuthErrorDetails {
    /// Builds the protocol error details for a registry error.
    #[must_use]
    pub fn from_error(err: &RegistryError) -> Self {
        Self {
            error_code: err.oauth_error_code().to_string(),
            http_status: err.http_status(),
            description: err.to_string(),
            additional_information: BTreeMap::new(),
        }
    }

    /// Adds an additional-information entry.
    #[must_use]
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_information.insert(key.into(), value.into());
        self
    }

    /// Renders the one-line summary form of the error.
    ///
    /// Format: `error="invalid_client", error_description="...", key="value"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "error=\"{}\", error_description=\"{}\"",
            self.error_code, self.description
        );
        for (key, value) in &self.additional_information {
            out.push_str(&format!(", {key}=\"{value}\""));
        }
        out
    }
}

//! OAuth 2.0 Client domain type.
//!
//! Defines the `Client` struct representing one registered OAuth 2.0 client.
//! Beyond the client id, the registry core treats the fields as an opaque
//! payload carried verbatim through the cache and the store.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// OAuth 2.0 Client registration.
///
/// Represents a client record with credentials and registry metadata.
/// The `client_id` is the primary identity and may never be blank; the
/// remaining fields are copied through the cache without inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client identifier used in OAuth flows.
    pub client_id: String,

    /// Encoded client secret (for confidential clients).
    ///
    /// Opaque to the registry core; mutated only through the explicit
    /// secret-update operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Resource ids this client may access.
    #[serde(default)]
    pub resource_ids: Vec<String>,

    /// OAuth scopes this client is allowed to request.
    #[serde(default)]
    pub scopes: Vec<String>,

    /// OAuth 2.0 grant types this client is allowed to use.
    #[serde(default)]
    pub grant_types: Vec<String>,

    /// Allowed redirect URIs for authorization code flow.
    #[serde(default)]
    pub redirect_uris: Vec<String>,

    /// Granted authorities for client-credentials access.
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Scopes that are auto-approved without user consent.
    #[serde(default)]
    pub auto_approve_scopes: Vec<String>,

    /// Access token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_validity: Option<i64>,

    /// Refresh token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_validity: Option<i64>,

    /// Free-form additional registration data.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub additional_information: serde_json::Map<String, serde_json::Value>,
}

impl Client {
    /// Creates a minimal client with the given id and no secret.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            resource_ids: Vec::new(),
            scopes: Vec::new(),
            grant_types: Vec::new(),
            redirect_uris: Vec::new(),
            authorities: Vec::new(),
            auto_approve_scopes: Vec::new(),
            access_token_validity: None,
            refresh_token_validity: None,
            additional_information: serde_json::Map::new(),
        }
    }

    /// Validates the client identity.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidClientId` if the client id is empty
    /// or consists only of whitespace.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.client_id.trim().is_empty() {
            return Err(RegistryError::InvalidClientId);
        }
        Ok(())
    }

    /// Checks if the given scope is registered for this client.
    #[must_use]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Checks if the given grant type is allowed for this client.
    #[must_use]
    pub fn is_grant_type_allowed(&self, grant_type: &str) -> bool {
        self.grant_types.iter().any(|g| g == grant_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> Client {
        Client {
            client_id: "web-app".to_string(),
            client_secret: Some("s3cr3t".to_string()),
            resource_ids: vec!["api".to_string()],
            scopes: vec!["read".to_string(), "write".to_string()],
            grant_types: vec![
                "authorization_code".to_string(),
                "refresh_token".to_string(),
            ],
            redirect_uris: vec!["https://example.com/callback".to_string()],
            authorities: vec!["ROLE_CLIENT".to_string()],
            auto_approve_scopes: vec!["read".to_string()],
            access_token_validity: Some(3600),
            refresh_token_validity: Some(2_592_000),
            additional_information: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(make_client().validate().is_ok());
    }

    #[test]
    fn test_validate_blank_id() {
        let mut client = make_client();
        client.client_id = String::new();
        assert!(matches!(
            client.validate(),
            Err(RegistryError::InvalidClientId)
        ));

        client.client_id = "   ".to_string();
        assert!(matches!(
            client.validate(),
            Err(RegistryError::InvalidClientId)
        ));
    }

    #[test]
    fn test_scope_and_grant_checks() {
        let client = make_client();
        assert!(client.has_scope("read"));
        assert!(!client.has_scope("admin"));
        assert!(client.is_grant_type_allowed("refresh_token"));
        assert!(!client.is_grant_type_allowed("password"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let client = make_client();
        let json = serde_json::to_string(&client).unwrap();
        let parsed: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, client);
    }

    #[test]
    fn test_serde_camel_case_fields() {
        let client = make_client();
        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("\"clientId\""));
        assert!(json.contains("\"grantTypes\""));
        assert!(json.contains("\"accessTokenValidity\""));
    }

    #[test]
    fn test_deserialize_minimal() {
        let parsed: Client = serde_json::from_str(r#"{"clientId":"cli"}"#).unwrap();
        assert_eq!(parsed.client_id, "cli");
        assert!(parsed.client_secret.is_none());
        assert!(parsed.scopes.is_empty());
    }
}

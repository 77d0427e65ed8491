use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sigil_crypto::PublicKey;

use crate::error::IdentityError;

/// Verification method type for multibase-encoded keys.
pub const MULTIKEY_TYPE: &str = "Multikey";

/// A verification method within a DID Document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// Verification method identifier (e.g., "did:plc:abc#signingKey").
    pub id: String,
    /// Type of the verification method (e.g., "Multikey").
    #[serde(rename = "type")]
    pub method_type: String,
    /// The DID that controls this verification method.
    pub controller: String,
    /// Multibase public key: `z` + base58btc(multicodec prefix ++ compressed point).
    pub public_key_multibase: String,
}

/// A service endpoint in a DID Document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service identifier (e.g., "did:plc:abc#pds").
    pub id: String,
    /// Service type (e.g., "PersonalDataServer").
    #[serde(rename = "type")]
    pub service_type: String,
    /// Service endpoint URL.
    pub service_endpoint: String,
}

/// W3C-compatible DID Document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DidDocument {
    /// The DID subject.
    pub id: String,
    /// Verification methods (public keys) associated with this DID.
    #[serde(rename = "verificationMethod", default)]
    pub verification_methods: Vec<VerificationMethod>,
    /// Service endpoints.
    #[serde(rename = "service", default)]
    pub services: Vec<Service>,
    /// When the document was created, if the source recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the document was last updated, if the source recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DidDocument {
    /// Create a new DID Document with no verification methods.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Some(Utc::now());
        Self {
            id: id.into(),
            verification_methods: Vec::new(),
            services: Vec::new(),
            created: now,
            updated: now,
        }
    }

    /// Create a new DID Document with `key` bound at `relationship_id`.
    pub fn with_key(id: impl Into<String>, relationship_id: &str, key: &PublicKey) -> Self {
        let mut doc = Self::new(id);
        doc.add_verification_method(relationship_id, key);
        doc
    }

    /// Add a `Multikey` verification method under `relationship_id`.
    ///
    /// A fragment (`#signingKey`) is stored relative to the document id.
    pub fn add_verification_method(&mut self, relationship_id: &str, key: &PublicKey) {
        let vm = VerificationMethod {
            id: self.absolute_id(relationship_id),
            method_type: MULTIKEY_TYPE.to_string(),
            controller: self.id.clone(),
            public_key_multibase: key.to_multibase(),
        };
        self.verification_methods.push(vm);
        self.updated = Some(Utc::now());
    }

    /// Find the verification method bound at `relationship_id`.
    pub fn verification_method(&self, relationship_id: &str) -> Option<&VerificationMethod> {
        let wanted = self.absolute_id(relationship_id);
        self.verification_methods
            .iter()
            .find(|vm| vm.id == relationship_id || self.absolute_id(&vm.id) == wanted)
    }

    /// Decode the public key bound at `relationship_id`.
    pub fn get_public_key(&self, relationship_id: &str) -> Result<PublicKey, IdentityError> {
        let vm = self
            .verification_method(relationship_id)
            .ok_or_else(|| IdentityError::KeyNotFound {
                did: self.id.clone(),
                relationship: relationship_id.to_string(),
            })?;
        Ok(PublicKey::from_multibase(&vm.public_key_multibase)?)
    }

    fn absolute_id(&self, id: &str) -> String {
        if id.starts_with('#') {
            format!("{}{}", self.id, id)
        } else {
            id.to_string()
        }
    }
}

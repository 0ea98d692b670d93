//! Certificate types.

use serde::{Deserialize, Serialize};

/// An SSL certificate attached to a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate identifier.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    /// Certificate name (usually the subdomain part).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fully qualified common name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Validity period in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    /// Lifecycle state (e.g. `"requesting"`, `"issued"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Issuing certificate authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Subject alternative names covered by the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_names: Option<Vec<String>>,
    /// PEM-encoded certificate signing request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The downloadable certificate material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateBundle {
    /// PEM-encoded server certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// PEM-encoded root certificate, when the authority provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// PEM-encoded intermediate certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<String>>,
}

/// The private key for a certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificatePrivateKey {
    /// PEM-encoded private key.
    pub private_key: String,
}

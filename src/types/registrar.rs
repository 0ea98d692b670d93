//! Registrar operation types.

use serde::{Deserialize, Serialize};

/// Result of a domain availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCheck {
    /// The domain name that was checked.
    pub domain: String,
    /// Whether the domain can be registered.
    pub available: bool,
    /// Whether the domain commands a premium price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
}

/// A domain registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRegistration {
    /// Registration identifier.
    pub id: u64,
    /// Identifier of the domain being registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u64>,
    /// Identifier of the registrant contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<u64>,
    /// Registration period in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    /// Order state (e.g. `"new"`, `"registering"`, `"registered"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A domain transfer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainTransfer {
    /// Transfer identifier.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<u64>,
    /// Order state (e.g. `"transferring"`, `"transferred"`, `"cancelled"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    /// Reason the transfer failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A domain renewal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRenewal {
    /// Renewal identifier.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u64>,
    /// Renewal period in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    /// Order state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body payload for registering a domain.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterDomainPayload {
    /// Identifier of the registrant contact.
    pub registrant_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
}

/// Body payload for transferring a domain in.
#[derive(Debug, Clone, Serialize)]
pub struct TransferDomainPayload {
    /// Identifier of the registrant contact.
    pub registrant_id: u64,
    /// Authorization code from the current registrar, where the TLD
    /// requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
}

/// Body payload for renewing a domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenewDomainPayload {
    /// Renewal period in years; server default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

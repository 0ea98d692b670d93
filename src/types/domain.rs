//! Domain types.

use serde::{Deserialize, Serialize};

/// A domain in the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier.
    pub id: u64,
    /// Domain name in ASCII (punycode for IDNs).
    pub name: String,
    /// Identifier of the owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    /// Identifier of the registrant contact, for registered domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<u64>,
    /// Domain name in Unicode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_name: Option<String>,
    /// Lifecycle state (e.g. `"registered"`, `"hosted"`, `"expired"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Whether the domain renews automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Whether WHOIS privacy is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_whois: Option<bool>,
    /// Expiration date, for registered domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body payload for adding a domain to the account.
#[derive(Debug, Clone, Serialize)]
pub struct DomainPayload {
    /// Domain name to add.
    pub name: String,
}

//! TLD catalog types.

use serde::{Deserialize, Serialize};

/// A top-level domain supported by the registrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tld {
    /// The TLD itself, without the leading dot (e.g. `"com"`).
    pub tld: String,
    /// Numeric TLD category as reported by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld_type: Option<u32>,
    /// Whether WHOIS privacy is available for this TLD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    /// Whether the TLD only supports renewal via auto-renew.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew_only: Option<bool>,
    /// Whether internationalized names are supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idn: Option<bool>,
    /// Minimum registration period in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_registration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_enabled: Option<bool>,
}

/// A registry-mandated extended attribute for a TLD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TldExtendedAttribute {
    /// Attribute name to submit on registration.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the registry requires this attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Accepted values, when the registry constrains them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<TldExtendedAttributeOption>>,
}

/// One accepted value of an extended attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TldExtendedAttributeOption {
    /// Human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Value to submit.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

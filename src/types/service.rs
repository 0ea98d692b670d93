//! One-click service types.

use serde::{Deserialize, Serialize};

/// A one-click service that can be applied to a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier.
    pub id: u64,
    /// Short identifier usable in paths instead of the numeric id.
    pub sid: String,
    /// Human-readable service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extra instructions shown during setup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_description: Option<String>,
    /// Whether applying the service needs caller-provided settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_setup: Option<bool>,
    /// Subdomain the service records default to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subdomain: Option<String>,
    /// Settings the service accepts when applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<ServiceSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One setting accepted by a one-click service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSetting {
    /// Machine-readable setting key.
    pub name: String,
    /// Human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Suffix appended to the entered value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Whether the value should be masked in UIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<bool>,
}

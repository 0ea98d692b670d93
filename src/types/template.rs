//! Template types.

use serde::{Deserialize, Serialize};

/// A record template that can be applied to a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template identifier.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    /// Human-readable template name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short identifier usable in paths instead of the numeric id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body payload for creating or updating a template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePayload {
    /// Human-readable template name.
    pub name: String,
    /// Short identifier usable in paths instead of the numeric id.
    pub sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

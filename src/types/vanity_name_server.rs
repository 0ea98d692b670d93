//! Vanity name server types.

use serde::{Deserialize, Serialize};

/// A name server branded under the customer's own domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VanityNameServer {
    /// Name server identifier.
    pub id: u64,
    /// Name server hostname (e.g. `"ns1.example.com"`).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

//! Zone and zone record types.

use serde::{Deserialize, Serialize};

/// A DNS zone hosted by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier.
    pub id: u64,
    /// Zone name (e.g. `"example.com"`).
    pub name: String,
    /// Identifier of the owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    /// Whether this is a reverse zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    /// Whether the zone is active on the name servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The rendered zone file for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneFile {
    /// Zone file content in BIND master format.
    pub zone: String,
}

/// Result of a zone or record distribution check across the name server
/// network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    /// Whether the zone/record is fully distributed.
    pub distributed: bool,
}

/// A record within a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Record identifier.
    pub id: u64,
    /// Record name relative to the zone; `""` for the apex.
    pub name: String,
    /// Record type (e.g. `"A"`, `"MX"`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content, as the server renders it.
    pub content: String,
    /// Name of the zone the record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// Identifier of the parent record, for derived records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    /// Time to live, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record priority, where the type uses one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Regions the record is served from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    /// Whether the record is maintained by the service itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_record: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body payload for creating a zone record.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneRecordPayload {
    /// Record name relative to the zone; `""` for the apex.
    pub name: String,
    /// Record type (e.g. `"A"`, `"MX"`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content.
    pub content: String,
    /// Time to live, in seconds; server default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record priority, for types that use one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Regions to serve the record from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

/// Body payload for updating a zone record; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneRecordUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

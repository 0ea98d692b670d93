//! Webhook types.

use serde::{Deserialize, Serialize};

/// A webhook endpoint the service delivers events to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook identifier.
    pub id: u64,
    /// Destination URL for event deliveries.
    pub url: String,
}

/// Body payload for registering a webhook.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    /// Destination URL for event deliveries.
    pub url: String,
}

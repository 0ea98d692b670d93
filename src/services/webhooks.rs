//! Webhook endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{Webhook, WebhookPayload};

/// The webhooks service.
pub struct Webhooks<'a> {
    pub(crate) client: &'a Client,
}

impl Webhooks<'_> {
    /// List the webhooks in the account.
    ///
    /// `GET /{account}/webhooks`
    pub async fn list_webhooks(&self, account_id: u64) -> Result<Envelope<Vec<Webhook>>> {
        let raw = self.client.get(&format!("/{account_id}/webhooks"), &[]).await?;
        Envelope::decode(raw)
    }

    /// Retrieve one webhook.
    ///
    /// `GET /{account}/webhooks/{webhook}`
    pub async fn get_webhook(&self, account_id: u64, webhook_id: u64) -> Result<Envelope<Webhook>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/webhooks/{webhook_id}"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Register a webhook.
    ///
    /// `POST /{account}/webhooks`
    pub async fn create_webhook(
        &self,
        account_id: u64,
        payload: &WebhookPayload,
    ) -> Result<Envelope<Webhook>> {
        let raw = self
            .client
            .post(&format!("/{account_id}/webhooks"), Some(payload))
            .await?;
        Envelope::decode(raw)
    }

    /// Deregister a webhook. The response carries no payload.
    ///
    /// `DELETE /{account}/webhooks/{webhook}`
    pub async fn delete_webhook(&self, account_id: u64, webhook_id: u64) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/webhooks/{webhook_id}"))
            .await?;
        Ok(Envelope::empty(raw))
    }
}

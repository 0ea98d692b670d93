//! Template endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{ListOptions, Template, TemplatePayload};

/// The templates service.
///
/// Templates are addressed by numeric id or short name (`sid`); the
/// identifier is passed through verbatim into the path.
pub struct Templates<'a> {
    pub(crate) client: &'a Client,
}

impl Templates<'_> {
    /// List the templates in the account.
    ///
    /// `GET /{account}/templates`
    pub async fn list_templates(
        &self,
        account_id: u64,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<Template>>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/templates"), &options.to_query())
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve one template.
    ///
    /// `GET /{account}/templates/{template}`
    pub async fn get_template(
        &self,
        account_id: u64,
        template: &str,
    ) -> Result<Envelope<Template>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/templates/{template}"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Create a template.
    ///
    /// `POST /{account}/templates`
    pub async fn create_template(
        &self,
        account_id: u64,
        payload: &TemplatePayload,
    ) -> Result<Envelope<Template>> {
        let raw = self
            .client
            .post(&format!("/{account_id}/templates"), Some(payload))
            .await?;
        Envelope::decode(raw)
    }

    /// Update a template.
    ///
    /// `PATCH /{account}/templates/{template}`
    pub async fn update_template(
        &self,
        account_id: u64,
        template: &str,
        payload: &TemplatePayload,
    ) -> Result<Envelope<Template>> {
        let raw = self
            .client
            .patch(&format!("/{account_id}/templates/{template}"), payload)
            .await?;
        Envelope::decode(raw)
    }

    /// Delete a template. The response carries no payload.
    ///
    /// `DELETE /{account}/templates/{template}`
    pub async fn delete_template(&self, account_id: u64, template: &str) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/templates/{template}"))
            .await?;
        Ok(Envelope::empty(raw))
    }

    /// Apply a template's records to a domain. The response carries no
    /// payload.
    ///
    /// `POST /{account}/domains/{domain}/templates/{template}`
    pub async fn apply_template(
        &self,
        account_id: u64,
        domain: &str,
        template: &str,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .post::<()>(
                &format!("/{account_id}/domains/{domain}/templates/{template}"),
                None,
            )
            .await?;
        Ok(Envelope::empty(raw))
    }
}

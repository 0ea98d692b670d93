//! Contact endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{Contact, ContactPayload, ListOptions};

/// The contacts service.
pub struct Contacts<'a> {
    pub(crate) client: &'a Client,
}

impl Contacts<'_> {
    /// List the contacts in the account.
    ///
    /// `GET /{account}/contacts`
    pub async fn list_contacts(
        &self,
        account_id: u64,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<Contact>>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/contacts"), &options.to_query())
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve one contact.
    ///
    /// `GET /{account}/contacts/{contact}`
    pub async fn get_contact(&self, account_id: u64, contact_id: u64) -> Result<Envelope<Contact>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/contacts/{contact_id}"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Create a contact.
    ///
    /// `POST /{account}/contacts`
    pub async fn create_contact(
        &self,
        account_id: u64,
        payload: &ContactPayload,
    ) -> Result<Envelope<Contact>> {
        let raw = self
            .client
            .post(&format!("/{account_id}/contacts"), Some(payload))
            .await?;
        Envelope::decode(raw)
    }

    /// Update fields of a contact; unset fields are left as they are.
    ///
    /// `PATCH /{account}/contacts/{contact}`
    pub async fn update_contact(
        &self,
        account_id: u64,
        contact_id: u64,
        payload: &ContactPayload,
    ) -> Result<Envelope<Contact>> {
        let raw = self
            .client
            .patch(&format!("/{account_id}/contacts/{contact_id}"), payload)
            .await?;
        Envelope::decode(raw)
    }

    /// Delete a contact. The response carries no payload.
    ///
    /// `DELETE /{account}/contacts/{contact}`
    pub async fn delete_contact(&self, account_id: u64, contact_id: u64) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/contacts/{contact_id}"))
            .await?;
        Ok(Envelope::empty(raw))
    }
}

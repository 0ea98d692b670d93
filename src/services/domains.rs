//! Domain endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{Domain, DomainPayload, ListOptions};

/// The domains service.
///
/// Domains are addressed by name or numeric id interchangeably; the
/// identifier is passed through verbatim into the path.
pub struct Domains<'a> {
    pub(crate) client: &'a Client,
}

impl Domains<'_> {
    /// List the domains in the account.
    ///
    /// `GET /{account}/domains`
    pub async fn list_domains(
        &self,
        account_id: u64,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<Domain>>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/domains"), &options.to_query())
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve one domain.
    ///
    /// `GET /{account}/domains/{domain}`
    pub async fn get_domain(&self, account_id: u64, domain: &str) -> Result<Envelope<Domain>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/domains/{domain}"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Add a domain to the account.
    ///
    /// `POST /{account}/domains`
    pub async fn create_domain(
        &self,
        account_id: u64,
        payload: &DomainPayload,
    ) -> Result<Envelope<Domain>> {
        let raw = self
            .client
            .post(&format!("/{account_id}/domains"), Some(payload))
            .await?;
        Envelope::decode(raw)
    }

    /// Remove a domain from the account. The response carries no payload.
    ///
    /// `DELETE /{account}/domains/{domain}`
    pub async fn delete_domain(&self, account_id: u64, domain: &str) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/domains/{domain}"))
            .await?;
        Ok(Envelope::empty(raw))
    }
}

//! Vanity name server endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::VanityNameServer;

/// The vanity name servers service.
pub struct VanityNameServers<'a> {
    pub(crate) client: &'a Client,
}

impl VanityNameServers<'_> {
    /// Enable vanity name servers for a domain, returning the assigned
    /// server set.
    ///
    /// `PUT /{account}/vanity/{domain}`
    pub async fn enable_vanity_name_servers(
        &self,
        account_id: u64,
        domain: &str,
    ) -> Result<Envelope<Vec<VanityNameServer>>> {
        let raw = self
            .client
            .put::<()>(&format!("/{account_id}/vanity/{domain}"), None)
            .await?;
        Envelope::decode(raw)
    }

    /// Disable vanity name servers for a domain. The response carries no
    /// payload.
    ///
    /// `DELETE /{account}/vanity/{domain}`
    pub async fn disable_vanity_name_servers(
        &self,
        account_id: u64,
        domain: &str,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/vanity/{domain}"))
            .await?;
        Ok(Envelope::empty(raw))
    }
}

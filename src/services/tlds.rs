//! TLD catalog endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{ListOptions, Tld, TldExtendedAttribute};

/// The TLD catalog service.
pub struct Tlds<'a> {
    pub(crate) client: &'a Client,
}

impl Tlds<'_> {
    /// List the TLDs supported for registration.
    ///
    /// `GET /tlds`
    pub async fn list_tlds(&self, options: &ListOptions) -> Result<Envelope<Vec<Tld>>> {
        let raw = self.client.get("/tlds", &options.to_query()).await?;
        Envelope::decode(raw)
    }

    /// Retrieve one TLD.
    ///
    /// `GET /tlds/{tld}`
    pub async fn get_tld(&self, tld: &str) -> Result<Envelope<Tld>> {
        let raw = self.client.get(&format!("/tlds/{tld}"), &[]).await?;
        Envelope::decode(raw)
    }

    /// List the registry-mandated extended attributes for a TLD.
    ///
    /// `GET /tlds/{tld}/extended_attributes`
    pub async fn get_tld_extended_attributes(
        &self,
        tld: &str,
    ) -> Result<Envelope<Vec<TldExtendedAttribute>>> {
        let raw = self
            .client
            .get(&format!("/tlds/{tld}/extended_attributes"), &[])
            .await?;
        Envelope::decode(raw)
    }
}

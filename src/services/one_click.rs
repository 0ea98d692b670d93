//! One-click service endpoints.

use std::collections::HashMap;

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{ListOptions, Service};

/// The one-click services catalog.
///
/// Services are addressed by numeric id or short name (`sid`); the
/// identifier is passed through verbatim into the path.
pub struct OneClickServices<'a> {
    pub(crate) client: &'a Client,
}

impl OneClickServices<'_> {
    /// List the available one-click services.
    ///
    /// `GET /services`
    pub async fn list_services(&self, options: &ListOptions) -> Result<Envelope<Vec<Service>>> {
        let raw = self.client.get("/services", &options.to_query()).await?;
        Envelope::decode(raw)
    }

    /// Retrieve one service.
    ///
    /// `GET /services/{service}`
    pub async fn get_service(&self, service: &str) -> Result<Envelope<Service>> {
        let raw = self.client.get(&format!("/services/{service}"), &[]).await?;
        Envelope::decode(raw)
    }

    /// List the services currently applied to a domain.
    ///
    /// `GET /{account}/domains/{domain}/services`
    pub async fn applied_services(
        &self,
        account_id: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<Service>>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/domains/{domain}/services"),
                &options.to_query(),
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Apply a service to a domain, with the settings it requires. The
    /// response carries no payload.
    ///
    /// `POST /{account}/domains/{domain}/services/{service}`
    pub async fn apply_service(
        &self,
        account_id: u64,
        domain: &str,
        service: &str,
        settings: &HashMap<String, String>,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .post(
                &format!("/{account_id}/domains/{domain}/services/{service}"),
                Some(settings),
            )
            .await?;
        Ok(Envelope::empty(raw))
    }

    /// Remove an applied service from a domain. The response carries no
    /// payload.
    ///
    /// `DELETE /{account}/domains/{domain}/services/{service}`
    pub async fn unapply_service(
        &self,
        account_id: u64,
        domain: &str,
        service: &str,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/domains/{domain}/services/{service}"))
            .await?;
        Ok(Envelope::empty(raw))
    }
}

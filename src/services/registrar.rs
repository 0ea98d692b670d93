//! Registrar endpoints: availability checks, registrations, transfers,
//! renewals, auto-renewal toggling.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{
    DomainCheck, DomainRegistration, DomainRenewal, DomainTransfer, RegisterDomainPayload,
    RenewDomainPayload, TransferDomainPayload,
};

/// The registrar service.
pub struct Registrar<'a> {
    pub(crate) client: &'a Client,
}

impl Registrar<'_> {
    /// Check whether a domain is available for registration.
    ///
    /// `GET /{account}/registrar/domains/{domain}/check`
    pub async fn check_domain(
        &self,
        account_id: u64,
        domain: &str,
    ) -> Result<Envelope<DomainCheck>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/registrar/domains/{domain}/check"),
                &[],
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Register a domain.
    ///
    /// `POST /{account}/registrar/domains/{domain}/registrations`
    pub async fn register_domain(
        &self,
        account_id: u64,
        domain: &str,
        payload: &RegisterDomainPayload,
    ) -> Result<Envelope<DomainRegistration>> {
        let raw = self
            .client
            .post(
                &format!("/{account_id}/registrar/domains/{domain}/registrations"),
                Some(payload),
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Start a transfer of a domain into the account.
    ///
    /// `POST /{account}/registrar/domains/{domain}/transfers`
    pub async fn transfer_domain(
        &self,
        account_id: u64,
        domain: &str,
        payload: &TransferDomainPayload,
    ) -> Result<Envelope<DomainTransfer>> {
        let raw = self
            .client
            .post(
                &format!("/{account_id}/registrar/domains/{domain}/transfers"),
                Some(payload),
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Renew a domain.
    ///
    /// `POST /{account}/registrar/domains/{domain}/renewals`
    pub async fn renew_domain(
        &self,
        account_id: u64,
        domain: &str,
        payload: &RenewDomainPayload,
    ) -> Result<Envelope<DomainRenewal>> {
        let raw = self
            .client
            .post(
                &format!("/{account_id}/registrar/domains/{domain}/renewals"),
                Some(payload),
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Turn on automatic renewal for a domain. The response carries no
    /// payload.
    ///
    /// `PUT /{account}/registrar/domains/{domain}/auto_renewal`
    pub async fn enable_auto_renewal(
        &self,
        account_id: u64,
        domain: &str,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .put::<()>(
                &format!("/{account_id}/registrar/domains/{domain}/auto_renewal"),
                None,
            )
            .await?;
        Ok(Envelope::empty(raw))
    }

    /// Turn off automatic renewal for a domain. The response carries no
    /// payload.
    ///
    /// `DELETE /{account}/registrar/domains/{domain}/auto_renewal`
    pub async fn disable_auto_renewal(
        &self,
        account_id: u64,
        domain: &str,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!(
                "/{account_id}/registrar/domains/{domain}/auto_renewal"
            ))
            .await?;
        Ok(Envelope::empty(raw))
    }
}

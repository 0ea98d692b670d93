//! Certificate endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{Certificate, CertificateBundle, CertificatePrivateKey, ListOptions};

/// The certificates service.
pub struct Certificates<'a> {
    pub(crate) client: &'a Client,
}

impl Certificates<'_> {
    /// List the certificates for a domain.
    ///
    /// `GET /{account}/domains/{domain}/certificates`
    pub async fn list_certificates(
        &self,
        account_id: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<Certificate>>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/domains/{domain}/certificates"),
                &options.to_query(),
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve one certificate.
    ///
    /// `GET /{account}/domains/{domain}/certificates/{certificate}`
    pub async fn get_certificate(
        &self,
        account_id: u64,
        domain: &str,
        certificate_id: u64,
    ) -> Result<Envelope<Certificate>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/domains/{domain}/certificates/{certificate_id}"),
                &[],
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Download the PEM material for an issued certificate.
    ///
    /// `GET /{account}/domains/{domain}/certificates/{certificate}/download`
    pub async fn download_certificate(
        &self,
        account_id: u64,
        domain: &str,
        certificate_id: u64,
    ) -> Result<Envelope<CertificateBundle>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/domains/{domain}/certificates/{certificate_id}/download"),
                &[],
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve the private key for an issued certificate.
    ///
    /// `GET /{account}/domains/{domain}/certificates/{certificate}/private_key`
    pub async fn get_certificate_private_key(
        &self,
        account_id: u64,
        domain: &str,
        certificate_id: u64,
    ) -> Result<Envelope<CertificatePrivateKey>> {
        let raw = self
            .client
            .get(
                &format!(
                    "/{account_id}/domains/{domain}/certificates/{certificate_id}/private_key"
                ),
                &[],
            )
            .await?;
        Envelope::decode(raw)
    }
}

//! Passive data records mirroring the remote API's JSON shapes.
//!
//! Resource structs carry no behavior and no invariants beyond field
//! presence; optional fields are `Option`, timestamps stay as the server's
//! strings, and no client-side validation is performed.

mod certificate;
mod contact;
mod domain;
mod identity;
mod oauth;
mod registrar;
mod service;
mod template;
mod tld;
mod vanity_name_server;
mod webhook;
mod zone;

pub use certificate::{Certificate, CertificateBundle, CertificatePrivateKey};
pub use contact::{Contact, ContactPayload};
pub use domain::{Domain, DomainPayload};
pub use identity::{Account, User, WhoamiIdentity};
pub use oauth::{OauthToken, OauthTokenPayload};
pub use registrar::{
    DomainCheck, DomainRegistration, DomainRenewal, DomainTransfer, RegisterDomainPayload,
    RenewDomainPayload, TransferDomainPayload,
};
pub use service::{Service, ServiceSetting};
pub use template::{Template, TemplatePayload};
pub use tld::{Tld, TldExtendedAttribute, TldExtendedAttributeOption};
pub use vanity_name_server::VanityNameServer;
pub use webhook::{Webhook, WebhookPayload};
pub use zone::{
    Zone, ZoneDistribution, ZoneFile, ZoneRecord, ZoneRecordPayload, ZoneRecordUpdatePayload,
};

/// Query options accepted by every list endpoint.
///
/// Only the options actually set are sent; the server applies its own
/// defaults for the rest.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Number of items per page.
    pub per_page: Option<u32>,
    /// Sort expression (e.g. `"name:asc"`).
    pub sort: Option<String>,
}

impl ListOptions {
    /// Render the set options as query pairs.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort".to_string(), sort.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_produce_no_query() {
        assert!(ListOptions::default().to_query().is_empty());
    }

    #[test]
    fn set_options_rendered_in_order() {
        let options = ListOptions {
            page: Some(2),
            per_page: Some(30),
            sort: Some("name:asc".to_string()),
        };
        assert_eq!(
            options.to_query(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "30".to_string()),
                ("sort".to_string(), "name:asc".to_string()),
            ]
        );
    }
}

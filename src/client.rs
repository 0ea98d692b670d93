//! Client configuration and per-resource service accessors.

use reqwest::Client as HttpClient;

use crate::services::{
    Accounts, Certificates, Contacts, Domains, Identity, Oauth, OneClickServices, Registrar,
    Templates, Tlds, VanityNameServers, Webhooks, Zones,
};

/// Production API endpoint.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.oneclickdns.com";

/// API version path prefix, prepended to every request path.
pub(crate) const API_VERSION: &str = "v2";

/// Default user agent: library name and semver version.
const DEFAULT_USER_AGENT: &str = concat!("oneclickdns-rust/", env!("CARGO_PKG_VERSION"));

/// The OneClickDNS API client.
///
/// Holds the immutable configuration shared by every resource service: base
/// URL, bearer access token, optional user-agent suffix, and the underlying
/// HTTP client. Construct one with [`Client::new`] and reach the per-resource
/// services through the accessor methods:
///
/// ```rust,no_run
/// # async fn example() -> oneclickdns::Result<()> {
/// let client = oneclickdns::Client::new("your-access-token");
/// let response = client.identity().whoami().await?;
/// # Ok(())
/// # }
/// ```
///
/// The configuration is never mutated after construction (besides the
/// one-time [`set_user_agent`](Self::set_user_agent)), so a single client is
/// safe to share across concurrent tasks.
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) access_token: String,
    pub(crate) user_agent: Option<String>,
    pub(crate) http: HttpClient,
}

impl Client {
    /// Create a client for the production endpoint.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (sandbox, local stub).
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            user_agent: None,
            http: HttpClient::new(),
        }
    }

    /// Set a custom user-agent prefix, prepended to the default agent.
    ///
    /// Intended to be called once, right after construction; the services
    /// borrow the client immutably, so the borrow checker enforces that the
    /// suffix cannot change mid-flight.
    pub fn set_user_agent(&mut self, suffix: impl Into<String>) {
        self.user_agent = Some(suffix.into());
    }

    /// The composed user-agent string: `"<suffix> <library>/<version>"`,
    /// with the suffix and separating space omitted when unset.
    pub(crate) fn user_agent(&self) -> String {
        match self.user_agent.as_deref() {
            Some(suffix) if !suffix.is_empty() => format!("{suffix} {DEFAULT_USER_AGENT}"),
            _ => DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Join a request path under the versioned base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, API_VERSION, path)
    }

    // ---- Service accessors ----

    /// The identity service (`whoami`).
    pub fn identity(&self) -> Identity<'_> {
        Identity { client: self }
    }

    /// The accounts service.
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    /// The zones and zone records service.
    pub fn zones(&self) -> Zones<'_> {
        Zones { client: self }
    }

    /// The domains service.
    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }

    /// The registrar service (checks, registrations, transfers, renewals).
    pub fn registrar(&self) -> Registrar<'_> {
        Registrar { client: self }
    }

    /// The certificates service.
    pub fn certificates(&self) -> Certificates<'_> {
        Certificates { client: self }
    }

    /// The contacts service.
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }

    /// The templates service.
    pub fn templates(&self) -> Templates<'_> {
        Templates { client: self }
    }

    /// The TLD catalog service.
    pub fn tlds(&self) -> Tlds<'_> {
        Tlds { client: self }
    }

    /// The vanity name servers service.
    pub fn vanity_name_servers(&self) -> VanityNameServers<'_> {
        VanityNameServers { client: self }
    }

    /// The webhooks service.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }

    /// The one-click services catalog.
    pub fn services(&self) -> OneClickServices<'_> {
        OneClickServices { client: self }
    }

    /// The OAuth token exchange service.
    pub fn oauth(&self) -> Oauth<'_> {
        Oauth { client: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- User agent composition ----

    #[test]
    fn default_user_agent() {
        let client = Client::new("token");
        assert_eq!(
            client.user_agent(),
            format!("oneclickdns-rust/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn custom_suffix_prepended_with_one_space() {
        let mut client = Client::new("token");
        client.set_user_agent("MyApp");
        assert_eq!(
            client.user_agent(),
            format!("MyApp oneclickdns-rust/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn empty_suffix_omitted() {
        let mut client = Client::new("token");
        client.set_user_agent("");
        assert_eq!(
            client.user_agent(),
            format!("oneclickdns-rust/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    // ---- URL joining ----

    #[test]
    fn url_is_version_prefixed() {
        let client = Client::new("token");
        assert_eq!(
            client.url("/1010/zones"),
            "https://api.oneclickdns.com/v2/1010/zones"
        );
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = Client::with_base_url("token", "http://127.0.0.1:8080/");
        assert_eq!(client.url("/whoami"), "http://127.0.0.1:8080/v2/whoami");
    }
}

//! Identity endpoint.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::WhoamiIdentity;

/// The identity service.
pub struct Identity<'a> {
    pub(crate) client: &'a Client,
}

impl Identity<'_> {
    /// Retrieve the account or user behind the current access token.
    ///
    /// `GET /whoami`
    pub async fn whoami(&self) -> Result<Envelope<WhoamiIdentity>> {
        let raw = self.client.get("/whoami", &[]).await?;
        Envelope::decode(raw)
    }
}

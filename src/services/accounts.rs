//! Account endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::Account;

/// The accounts service.
pub struct Accounts<'a> {
    pub(crate) client: &'a Client,
}

impl Accounts<'_> {
    /// List the accounts the current access token can operate on.
    ///
    /// `GET /accounts`
    pub async fn list_accounts(&self) -> Result<Envelope<Vec<Account>>> {
        let raw = self.client.get("/accounts", &[]).await?;
        Envelope::decode(raw)
    }
}

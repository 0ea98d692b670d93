//! OAuth token exchange endpoint.

use serde::Serialize;

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{OauthToken, OauthTokenPayload};

/// The OAuth service.
pub struct Oauth<'a> {
    pub(crate) client: &'a Client,
}

impl Oauth<'_> {
    /// Exchange an authorization code for an access token.
    ///
    /// `POST /oauth/access_token`
    pub async fn exchange_authorization_for_token(
        &self,
        payload: &OauthTokenPayload,
    ) -> Result<Envelope<OauthToken>> {
        #[derive(Serialize)]
        struct TokenExchangeBody<'a> {
            client_id: &'a str,
            client_secret: &'a str,
            code: &'a str,
            grant_type: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            state: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            redirect_uri: Option<&'a str>,
        }

        let body = TokenExchangeBody {
            client_id: &payload.client_id,
            client_secret: &payload.client_secret,
            code: &payload.code,
            grant_type: "authorization_code",
            state: payload.state.as_deref(),
            redirect_uri: payload.redirect_uri.as_deref(),
        };

        let raw = self.client.post("/oauth/access_token", Some(&body)).await?;
        Envelope::decode(raw)
    }
}

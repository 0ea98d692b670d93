//! OAuth token exchange types.

use serde::{Deserialize, Serialize};

/// An access token obtained through the authorization-code flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OauthToken {
    /// The bearer token to authenticate subsequent requests with.
    pub access_token: String,
    /// Token type; always `"Bearer"`.
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Account the token grants access to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
}

/// Body payload for exchanging an authorization code for a token.
#[derive(Debug, Clone, Serialize)]
pub struct OauthTokenPayload {
    /// OAuth application client id.
    pub client_id: String,
    /// OAuth application client secret.
    pub client_secret: String,
    /// Authorization code returned by the authorize step.
    pub code: String,
    /// Opaque state echoed back by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Redirect URI used in the authorize step, where required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

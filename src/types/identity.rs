//! Account and identity types.

use serde::{Deserialize, Serialize};

/// An account in the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: u64,
    /// Email address associated with the account.
    pub email: Option<String>,
    /// Identifier of the subscribed plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A user in the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: u64,
    /// Email address the user signs in with.
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The identity behind the current access token.
///
/// Exactly one of `account` (account token) or `user` (user token) is
/// populated by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoamiIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

//! Resource method wrappers, one module per API resource.
//!
//! Each service holds an immutable borrow of the [`Client`](crate::Client).
//! Every method does the same three things: format the versioned path from
//! positional identifiers, perform exactly one round trip through the
//! dispatcher, and decode the raw response into an
//! [`Envelope`](crate::Envelope) of the resource's struct type. No method
//! retries, auto-follows pagination, or caches.

mod accounts;
mod certificates;
mod contacts;
mod domains;
mod identity;
mod oauth;
mod one_click;
mod registrar;
mod templates;
mod tlds;
mod vanity_name_servers;
mod webhooks;
mod zones;

pub use accounts::Accounts;
pub use certificates::Certificates;
pub use contacts::Contacts;
pub use domains::Domains;
pub use identity::Identity;
pub use oauth::Oauth;
pub use one_click::OneClickServices;
pub use registrar::Registrar;
pub use templates::Templates;
pub use tlds::Tlds;
pub use vanity_name_servers::VanityNameServers;
pub use webhooks::Webhooks;
pub use zones::Zones;

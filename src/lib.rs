//! # oneclickdns
//!
//! A typed Rust client for the OneClickDNS v2 HTTP API.
//!
//! Every resource of the remote API is exposed as a service with one method
//! per endpoint. Each method performs exactly one HTTP round trip: it formats
//! a versioned path from positional identifiers, sends the request with
//! bearer-token authentication, and decodes the JSON response into a typed
//! [`Envelope`].
//!
//! ## Services
//!
//! | Service | Endpoints |
//! |---------|-----------|
//! | [`Identity`](services::Identity) | `whoami` |
//! | [`Accounts`](services::Accounts) | account listing |
//! | [`Zones`](services::Zones) | zones, zone files, zone records, distribution checks |
//! | [`Domains`](services::Domains) | domain CRUD |
//! | [`Registrar`](services::Registrar) | availability checks, registrations, transfers, renewals |
//! | [`Certificates`](services::Certificates) | certificate listing and download |
//! | [`Contacts`](services::Contacts) | contact CRUD |
//! | [`Templates`](services::Templates) | template CRUD and application |
//! | [`Tlds`](services::Tlds) | TLD catalog |
//! | [`VanityNameServers`](services::VanityNameServers) | vanity name server toggling |
//! | [`Webhooks`](services::Webhooks) | webhook CRUD |
//! | [`OneClickServices`](services::OneClickServices) | one-click service catalog and application |
//! | [`Oauth`](services::Oauth) | authorization-code token exchange |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oneclickdns::{Client, ListOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-access-token");
//!
//!     let account_id = 1010;
//!     let response = client
//!         .zones()
//!         .list_zones(account_id, &ListOptions::default())
//!         .await?;
//!
//!     for zone in response.data.unwrap_or_default() {
//!         println!("{} ({})", zone.name, zone.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Error). The enum provides one
//! variant per failure mode:
//!
//! - [`Error::BadRequest`] — HTTP 400, with per-field validation messages
//! - [`Error::NotFound`] — HTTP 404
//! - [`Error::Http`] — any other non-2xx status, carrying the status code
//! - [`Error::Transport`] — no response received at all
//! - [`Error::Decode`] — the response body did not match the expected shape
//!
//! The client never retries, caches, or suppresses a failure; every error
//! propagates to the immediate caller.

mod client;
mod error;
mod http;
mod response;
pub mod services;
pub mod types;
mod util;

// Re-export the client
pub use client::Client;

// Re-export error types
pub use error::{Error, Result};

// Re-export the envelope types
pub use response::{Envelope, Pagination};

// Re-export common request types at the crate root
pub use types::ListOptions;

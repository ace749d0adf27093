//! Blocking client for the Asterisk REST Interface (ARI).
//!
//! # Overview
//! Every ARI endpoint is one method on [`AriClient`]. A call resolves the
//! endpoint path under `/ari/` (and the configured prefix), encodes its
//! parameters into the query string (GET) or a form body (everything else),
//! hands the request to a [`Transport`], classifies the response by status,
//! and decodes JSON bodies into `serde_json::Value`.
//!
//! # Design
//! - `AriClient` holds only its config and transport; no state survives a
//!   call, so one client can be shared across threads.
//! - The transport is injected. [`UreqTransport`] is the default; tests and
//!   embedders can supply their own.
//! - `build_request` / `parse_response` are public, so a caller may run the
//!   HTTP round-trip itself.
//! - The event WebSocket is not bound.
//!
//! ```no_run
//! use ari_client::{AriClient, ClientConfig, Params};
//!
//! let config = ClientConfig::new("pbx.local", 8088).with_credentials("asterisk", "secret");
//! let client = AriClient::new(config)?;
//! let bridge = client.bridges_create(&Params::new().with("type", "mixing"))?;
//! println!("created bridge {}", bridge["id"]);
//! # Ok::<(), ari_client::AriError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod params;
mod resources;
pub mod transport;

pub use client::AriClient;
pub use config::{ClientConfig, ProxyConfig};
pub use error::{AriError, AriResult, ErrorDetail};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use params::{ParamValue, Params};
pub use transport::UreqTransport;

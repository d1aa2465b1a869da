//! Async client for the N-able N-sight remote monitoring platform.
//!
//! N-sight exposes a single-endpoint XML API: every operation is a GET
//! against `https://{server}/api/` with a `service` name, a static
//! `apikey`, and a flat set of query parameters. This crate wraps that
//! surface with typed endpoint methods, one per service, decoding the
//! XML payloads into the record types in [`models`].
//!
//! The endpoint methods are pure passthrough -- no caching, no retries,
//! no session state. Higher layers (`nsight-core`) own reconciliation.

pub mod client;
pub mod error;
pub mod models;
pub mod requests;
pub mod transport;

mod endpoints;

pub use client::ApiClient;
pub use error::Error;
pub use transport::TransportConfig;

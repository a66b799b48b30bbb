//! Async client for the Solis site REST API.
//!
//! [`SiteApi`] is the seam the views are written against; [`ApiClient`] is
//! the reqwest-backed implementation. Every request either yields a parsed
//! payload or one of the three [`ClientError`] kinds.

pub mod api;
pub mod client;
pub mod error;
pub mod payload;

pub use api::SiteApi;
pub use client::{ApiClient, ApiConfig};
pub use error::ClientError;

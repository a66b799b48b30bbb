//! Core record types and client-side rules for the Solis site.
//!
//! This crate is deliberately free of HTTP and IO dependencies. The records
//! mirror what the site API returns; the client only ever holds derived,
//! ephemeral copies of them.

pub mod admin;
pub mod careers;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod form;
pub mod resume;

pub use error::{Result, ValidationError};

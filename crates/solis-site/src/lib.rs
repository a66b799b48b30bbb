//! View-state layer of the Solis site.
//!
//! Each view owns the state one page renders from and exposes the async
//! operations that page triggers: fetch on activation, submit a form, mutate
//! an application's status. Views are written against
//! [`solis_client::SiteApi`] and report every outcome through a shared
//! [`notice::Notices`] queue.

pub mod config;
pub mod notice;
pub mod session;
pub mod submit;
pub mod views;

#[cfg(test)]
mod fake;

pub use notice::{Notice, NoticeLevel, Notices};

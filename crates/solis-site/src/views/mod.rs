//! One state holder per page.
//!
//! Views take the [`SiteApi`](solis_client::SiteApi) and the shared
//! [`Notices`] queue as arguments on every operation, so a view is plain data
//! that can be rendered by the CLI, the terminal dashboard, or a test.

use std::future::Future;

use solis_client::ClientError;

use crate::notice::Notices;

pub mod admin;
pub mod blog;
pub mod careers;
pub mod chat;
pub mod contact;
pub mod home;
pub mod projects;

/// Await one read request. On failure queue `failure` and return `None`, so
/// the caller keeps whatever it was showing before.
pub(crate) async fn fetch<T>(
  notices: &mut Notices,
  failure: &str,
  request: impl Future<Output = Result<T, ClientError>>,
) -> Option<T> {
  match request.await {
    Ok(value) => Some(value),
    Err(e) => {
      notices.failure(failure, &e);
      None
    }
  }
}

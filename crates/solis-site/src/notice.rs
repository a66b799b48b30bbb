//! Transient, dismissible user notices.
//!
//! Views never surface errors any other way: every failed request ends up in
//! [`Notices::failure`], which logs the cause and queues the user-facing text.

use solis_client::ClientError;
use solis_core::ValidationError;
use strum::Display;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
  Success,
  Info,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub level:   NoticeLevel,
  pub message: String,
}

/// Queue of notices waiting to be shown, oldest first.
#[derive(Debug, Default)]
pub struct Notices {
  queue: Vec<Notice>,
}

impl Notices {
  pub fn new() -> Self { Self::default() }

  pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
    self.queue.push(Notice { level, message: message.into() });
  }

  pub fn success(&mut self, message: impl Into<String>) {
    self.push(NoticeLevel::Success, message);
  }

  pub fn info(&mut self, message: impl Into<String>) {
    self.push(NoticeLevel::Info, message);
  }

  pub fn error(&mut self, message: impl Into<String>) {
    self.push(NoticeLevel::Error, message);
  }

  /// Report a failed request: log `err`, queue `message` for the user.
  pub fn failure(&mut self, message: &str, err: &ClientError) {
    warn!(error = %err, "{message}");
    self.error(message);
  }

  /// Report a submission rejected before any request was sent.
  pub fn rejected(&mut self, err: &ValidationError) {
    self.error(err.notice());
  }

  pub fn latest(&self) -> Option<&Notice> { self.queue.last() }

  pub fn len(&self) -> usize { self.queue.len() }

  pub fn is_empty(&self) -> bool { self.queue.is_empty() }

  /// Remove the notice at `index`, if it is still queued.
  pub fn dismiss(&mut self, index: usize) -> Option<Notice> {
    (index < self.queue.len()).then(|| self.queue.remove(index))
  }

  /// Take every queued notice, leaving the queue empty.
  pub fn drain(&mut self) -> Vec<Notice> { std::mem::take(&mut self.queue) }

  pub fn has_errors(&self) -> bool {
    self.queue.iter().any(|n| n.level == NoticeLevel::Error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn failure_queues_user_text_not_error_detail() {
    let mut notices = Notices::new();
    notices.failure(
      "Failed to load job listings",
      &ClientError::NetworkFailure("connection refused".into()),
    );
    let notice = notices.latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to load job listings");
  }

  #[test]
  fn dismiss_and_drain() {
    let mut notices = Notices::new();
    notices.success("a");
    notices.info("b");
    notices.error("c");
    assert_eq!(notices.dismiss(1).unwrap().message, "b");
    assert!(notices.dismiss(5).is_none());
    assert!(notices.has_errors());
    let drained = notices.drain();
    assert_eq!(drained.len(), 2);
    assert!(notices.is_empty());
  }
}

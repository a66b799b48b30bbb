//! The form submission lifecycle shared by every form on the site.
//!
//! validate → send once → on success reset and notify, on failure notify and
//! keep what the user typed.

use std::future::Future;

use solis_client::ClientError;
use solis_core::{ValidationError, form::FormModel};
use tracing::debug;

use crate::notice::Notices;

/// Notice texts for one form.
#[derive(Debug, Clone, Copy)]
pub struct SubmitMessages {
  pub success: &'static str,
  pub failure: &'static str,
}

/// What happened to one submit trigger.
#[derive(Debug)]
pub enum SubmitOutcome<T> {
  /// The request succeeded; the form has been reset.
  Sent(T),
  /// Rejected on the client; nothing was sent.
  Rejected(ValidationError),
  /// The request failed; the form is untouched.
  Failed(ClientError),
  /// A previous submission is still in flight; nothing was sent.
  Busy,
}

impl<T> SubmitOutcome<T> {
  pub fn is_sent(&self) -> bool { matches!(self, Self::Sent(_)) }
}

/// A form plus its in-flight flag.
#[derive(Debug, Default)]
pub struct FormSubmission<F> {
  fields:     F,
  submitting: bool,
}

impl<F: FormModel> FormSubmission<F> {
  pub fn new() -> Self {
    Self { fields: F::default(), submitting: false }
  }

  pub fn fields(&self) -> &F { &self.fields }

  pub fn fields_mut(&mut self) -> &mut F { &mut self.fields }

  /// While true the submit trigger is disabled.
  pub fn is_submitting(&self) -> bool { self.submitting }

  /// Run one submission. `send` receives a snapshot of the fields and is
  /// called at most once.
  pub async fn submit<T, Fut>(
    &mut self,
    notices: &mut Notices,
    messages: SubmitMessages,
    send: impl FnOnce(F) -> Fut,
  ) -> SubmitOutcome<T>
  where
    Fut: Future<Output = Result<T, ClientError>>,
  {
    if self.submitting {
      return SubmitOutcome::Busy;
    }
    if let Err(e) = self.fields.validate() {
      debug!(error = %e, "submission rejected");
      notices.rejected(&e);
      return SubmitOutcome::Rejected(e);
    }

    self.submitting = true;
    let result = send(self.fields.clone()).await;
    self.submitting = false;

    match result {
      Ok(value) => {
        self.fields = F::default();
        notices.success(messages.success);
        SubmitOutcome::Sent(value)
      }
      Err(e) => {
        notices.failure(messages.failure, &e);
        SubmitOutcome::Failed(e)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use solis_core::contact::ContactForm;

  use super::*;
  use crate::notice::NoticeLevel;

  const MESSAGES: SubmitMessages = SubmitMessages {
    success: "sent",
    failure: "not sent",
  };

  fn filled() -> ContactForm {
    ContactForm {
      name:    "Ada".into(),
      email:   "ada@example.com".into(),
      subject: "Hi".into(),
      message: "Hello".into(),
    }
  }

  #[tokio::test]
  async fn success_resets_to_defaults() {
    let mut form = FormSubmission::<ContactForm>::new();
    *form.fields_mut() = filled();
    let mut notices = Notices::new();

    let outcome = form
      .submit(&mut notices, MESSAGES, |fields| async move {
        Ok::<_, ClientError>(fields.name)
      })
      .await;

    assert!(matches!(outcome, SubmitOutcome::Sent(ref n) if n == "Ada"));
    assert_eq!(form.fields(), &ContactForm::default());
    assert!(!form.is_submitting());
    assert_eq!(notices.latest().unwrap().level, NoticeLevel::Success);
  }

  #[tokio::test]
  async fn failure_preserves_fields() {
    let mut form = FormSubmission::<ContactForm>::new();
    *form.fields_mut() = filled();
    let mut notices = Notices::new();

    let outcome = form
      .submit(&mut notices, MESSAGES, |_| async {
        Err::<(), _>(ClientError::ServerRejected(500))
      })
      .await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(form.fields(), &filled());
    assert!(!form.is_submitting());
    assert_eq!(notices.latest().unwrap().message, "not sent");
  }

  #[tokio::test]
  async fn missing_required_field_sends_nothing() {
    let mut form = FormSubmission::<ContactForm>::new();
    form.fields_mut().name = "Ada".into();
    let mut notices = Notices::new();
    let called = Cell::new(false);

    let outcome = form
      .submit(&mut notices, MESSAGES, |_| {
        called.set(true);
        async { Ok::<(), ClientError>(()) }
      })
      .await;

    assert!(matches!(
      outcome,
      SubmitOutcome::Rejected(ValidationError::MissingFields(ref f))
        if f == &vec!["Email", "Message"]
    ));
    assert!(!called.get());
    assert_eq!(notices.latest().unwrap().level, NoticeLevel::Error);
    assert_eq!(form.fields().name, "Ada");
  }

  #[tokio::test]
  async fn in_flight_submission_blocks_a_second_trigger() {
    let mut form = FormSubmission::<ContactForm>::new();
    *form.fields_mut() = filled();
    form.submitting = true;
    let mut notices = Notices::new();

    let outcome = form
      .submit(&mut notices, MESSAGES, |_| async {
        Ok::<(), ClientError>(())
      })
      .await;
    assert!(matches!(outcome, SubmitOutcome::Busy));
    assert!(notices.is_empty());
  }
}

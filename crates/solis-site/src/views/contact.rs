//! Contact page.

use solis_client::SiteApi;
use solis_core::contact::{ContactForm, ContactMessage, NewContactMessage};

use crate::{
  notice::Notices,
  submit::{FormSubmission, SubmitMessages, SubmitOutcome},
};

const MESSAGES: SubmitMessages = SubmitMessages {
  success: "Message sent successfully! We'll get back to you within 24-48 \
            hours.",
  failure: "Failed to send message. Please try again.",
};

#[derive(Debug, Default)]
pub struct ContactView {
  pub form: FormSubmission<ContactForm>,
}

impl ContactView {
  pub fn new() -> Self { Self::default() }

  pub async fn submit<A: SiteApi>(
    &mut self,
    api: &A,
    notices: &mut Notices,
  ) -> SubmitOutcome<ContactMessage> {
    self
      .form
      .submit(notices, MESSAGES, |fields| {
        api.submit_contact(NewContactMessage::from(fields))
      })
      .await
  }
}

//! Typed request bodies, one per submitting endpoint.
//!
//! JSON bodies reuse the core record types directly
//! ([`solis_core::contact::NewContactMessage`],
//! [`solis_core::admin::Credentials`]); the types here cover the rest.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use solis_core::{
  careers::{ApplicationForm, JobPosting},
  resume::ResumeFile,
};

use crate::ClientError;

// ─── Applications ────────────────────────────────────────────────────────────

/// Multipart body of `POST /applications`.
///
/// Holding a [`ResumeFile`] means the attachment already passed the size and
/// extension rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPayload {
  pub job_id:    String,
  pub job_title: String,
  pub form:      ApplicationForm,
  pub resume:    ResumeFile,
}

impl ApplicationPayload {
  pub fn new(job: &JobPosting, form: ApplicationForm, resume: ResumeFile) -> Self {
    Self {
      job_id: job.id.to_string(),
      job_title: job.title.clone(),
      form,
      resume,
    }
  }

  /// Text parts in wire order. `cover_letter` is always sent, possibly empty.
  pub fn text_fields(&self) -> Vec<(&'static str, String)> {
    vec![
      ("job_id", self.job_id.clone()),
      ("job_title", self.job_title.clone()),
      ("name", self.form.name.clone()),
      ("email", self.form.email.clone()),
      ("phone", self.form.phone.clone()),
      ("cover_letter", self.form.cover_letter.clone()),
    ]
  }

  pub fn into_multipart(self) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for (name, value) in self.text_fields() {
      form = form.text(name, value);
    }
    let file_name = self.resume.file_name().to_string();
    let media_type = self.resume.kind().media_type();
    let part = Part::bytes(self.resume.into_bytes())
      .file_name(file_name)
      .mime_str(media_type)?;
    Ok(form.part("resume", part))
  }
}

// ─── Chat ────────────────────────────────────────────────────────────────────

/// JSON body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
  pub message: String,
}

/// Response body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
  pub response: String,
}

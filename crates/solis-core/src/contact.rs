//! Contact messages submitted by visitors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::{Field, FormModel, non_blank};

/// A stored contact message. Never edited or deleted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
  pub id:        Uuid,
  pub name:      String,
  pub email:     String,
  pub subject:   Option<String>,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
}

/// JSON body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
  pub name:    String,
  pub email:   String,
  pub subject: Option<String>,
  pub message: String,
}

/// State of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl FormModel for ContactForm {
  fn fields(&self) -> Vec<Field<'_>> {
    vec![
      Field::required("name", "Name", &self.name),
      Field::required("email", "Email", &self.email),
      Field::optional("subject", "Subject", &self.subject),
      Field::required("message", "Message", &self.message),
    ]
  }
}

impl From<ContactForm> for NewContactMessage {
  fn from(form: ContactForm) -> Self {
    NewContactMessage {
      subject: non_blank(&form.subject),
      name:    form.name,
      email:   form.email,
      message: form.message,
    }
  }
}

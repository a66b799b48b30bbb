//! Job postings and applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::form::{Field, FormModel};

// ─── Postings ────────────────────────────────────────────────────────────────

/// Whether a posting is open for applications.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobStatus {
  Active,
  #[serde(alias = "inactive")]
  Closed,
}

/// An open or closed position. Created and edited outside this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
  pub id:               Uuid,
  pub title:            String,
  pub department:       String,
  pub location:         String,
  /// Full-time, Part-time, Contract, Internship; free text on the server.
  #[serde(rename = "type")]
  pub kind:             String,
  pub description:      String,
  #[serde(default)]
  pub requirements:     Vec<String>,
  #[serde(default)]
  pub responsibilities: Vec<String>,
  pub status:           JobStatus,
  pub posted_date:      DateTime<Utc>,
}

impl JobPosting {
  pub fn is_active(&self) -> bool { self.status == JobStatus::Active }
}

// ─── Applications ────────────────────────────────────────────────────────────

/// Triage state of an application. Any state may move to any other.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApplicationStatus {
  #[default]
  Pending,
  Reviewing,
  Shortlisted,
  Rejected,
}

/// Server-side analysis of the uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
  #[serde(default)]
  pub raw_analysis:  String,
  pub resume_length: Option<usize>,
}

/// A submitted application as listed to administrators.
///
/// `job_title` is the title captured at submission time; it is not kept in
/// sync with the posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
  pub id:           Uuid,
  pub job_id:       String,
  pub job_title:    String,
  pub name:         String,
  pub email:        String,
  pub phone:        String,
  pub cover_letter: Option<String>,
  #[serde(default)]
  pub resume_text:  Option<String>,
  pub ai_analysis:  Option<ResumeAnalysis>,
  #[serde(default)]
  pub status:       ApplicationStatus,
  pub applied_date: DateTime<Utc>,
}

impl JobApplication {
  /// The generated analysis text, if the server produced one.
  pub fn analysis_text(&self) -> Option<&str> {
    self
      .ai_analysis
      .as_ref()
      .map(|a| a.raw_analysis.as_str())
      .filter(|s| !s.is_empty())
  }
}

/// Response body of a successful application submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
  pub message:        String,
  pub application_id: Uuid,
}

// ─── Application form ────────────────────────────────────────────────────────

/// Text fields of the application dialog. The resume and the selected
/// position are held next to it by the careers view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
  pub name:         String,
  pub email:        String,
  pub phone:        String,
  pub cover_letter: String,
}

impl FormModel for ApplicationForm {
  fn fields(&self) -> Vec<Field<'_>> {
    vec![
      Field::required("name", "Full Name", &self.name),
      Field::required("email", "Email", &self.email),
      Field::required("phone", "Phone", &self.phone),
      Field::optional("cover_letter", "Cover Letter", &self.cover_letter),
    ]
  }
}

//! Careers page: open positions and the application form.

use solis_client::{SiteApi, payload::ApplicationPayload};
use solis_core::{
  ValidationError,
  careers::{ApplicationForm, ApplicationReceipt, JobPosting, JobStatus},
  form::FormModel,
  resume::ResumeFile,
};
use tracing::debug;
use uuid::Uuid;

use super::fetch;
use crate::{
  notice::Notices,
  submit::{FormSubmission, SubmitMessages, SubmitOutcome},
};

const MESSAGES: SubmitMessages = SubmitMessages {
  success: "Application submitted successfully! We'll be in touch soon.",
  failure: "Failed to submit application. Please try again.",
};

#[derive(Debug, Default)]
pub struct CareersView {
  /// Active postings, in server order.
  pub jobs: Vec<JobPosting>,
  pub form: FormSubmission<ApplicationForm>,
  selected: Option<JobPosting>,
  resume:   Option<ResumeFile>,
}

impl CareersView {
  pub fn new() -> Self { Self::default() }

  pub async fn load<A: SiteApi>(&mut self, api: &A, notices: &mut Notices) {
    if let Some(jobs) = fetch(
      notices,
      "Failed to load job listings",
      api.jobs(Some(JobStatus::Active)),
    )
    .await
    {
      self.jobs = jobs;
    }
  }

  /// Open the application form for the posting with `id`. Returns false if
  /// no loaded posting has that id.
  pub fn select_job(&mut self, id: Uuid) -> bool {
    self.selected = self.jobs.iter().find(|j| j.id == id).cloned();
    self.selected.is_some()
  }

  pub fn selected(&self) -> Option<&JobPosting> { self.selected.as_ref() }

  /// Validate and hold a resume for the next submission. A rejected file
  /// leaves any previously attached resume in place.
  pub fn attach_resume(
    &mut self,
    file_name: &str,
    bytes: Vec<u8>,
    notices: &mut Notices,
  ) -> bool {
    match ResumeFile::new(file_name, bytes) {
      Ok(resume) => {
        debug!(?resume, "resume attached");
        self.resume = Some(resume);
        true
      }
      Err(e) => {
        notices.rejected(&e);
        false
      }
    }
  }

  pub fn resume(&self) -> Option<&ResumeFile> { self.resume.as_ref() }

  /// Send the application for the selected posting. On success the form,
  /// the attached resume and the selection are all cleared.
  pub async fn submit<A: SiteApi>(
    &mut self,
    api: &A,
    notices: &mut Notices,
  ) -> SubmitOutcome<ApplicationReceipt> {
    if self.form.is_submitting() {
      return SubmitOutcome::Busy;
    }
    let Some(job) = self.selected.clone() else {
      return reject(notices, ValidationError::NoPositionSelected);
    };
    if let Err(e) = self.form.fields().validate() {
      return reject(notices, e);
    }
    let Some(resume) = self.resume.clone() else {
      return reject(notices, ValidationError::MissingResume);
    };

    let outcome = self
      .form
      .submit(notices, MESSAGES, |fields| {
        api.submit_application(ApplicationPayload::new(&job, fields, resume))
      })
      .await;
    if outcome.is_sent() {
      self.resume = None;
      self.selected = None;
    }
    outcome
  }
}

fn reject<T>(notices: &mut Notices, e: ValidationError) -> SubmitOutcome<T> {
  notices.rejected(&e);
  SubmitOutcome::Rejected(e)
}

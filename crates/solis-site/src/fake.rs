//! In-memory `SiteApi` for view tests.
//!
//! Records every call by name, can be told to fail or stall a call, and
//! keeps submitted payloads for inspection.

use std::{
  collections::HashMap,
  sync::{Mutex, MutexGuard},
  time::Duration,
};

use chrono::Utc;
use solis_client::{ClientError, SiteApi, payload::ApplicationPayload};
use solis_core::{
  admin::{AdminIdentity, AnalyticsSnapshot, Credentials},
  careers::{
    ApplicationReceipt, ApplicationStatus, JobApplication, JobPosting, JobStatus,
  },
  contact::{ContactMessage, NewContactMessage},
  content::{BlogPost, Project, Testimonial},
};
use uuid::Uuid;

#[derive(Default)]
pub struct FakeState {
  pub testimonials:      Vec<Testimonial>,
  pub projects:          Vec<Project>,
  pub blog_posts:        Vec<BlogPost>,
  pub jobs:              Vec<JobPosting>,
  pub applications:      Vec<JobApplication>,
  pub contacts:          Vec<ContactMessage>,
  pub analytics:         AnalyticsSnapshot,
  pub summaries_made:    usize,
  pub sent_applications: Vec<ApplicationPayload>,
  pub sent_contacts:     Vec<NewContactMessage>,
  failures:              HashMap<&'static str, ClientError>,
  delays:                HashMap<&'static str, Duration>,
  calls:                 Vec<&'static str>,
}

#[derive(Default)]
pub struct FakeApi {
  state: Mutex<FakeState>,
}

impl FakeApi {
  pub fn with(seed: impl FnOnce(&mut FakeState)) -> Self {
    let api = Self::default();
    seed(&mut api.state());
    api
  }

  pub fn state(&self) -> MutexGuard<'_, FakeState> {
    self.state.lock().unwrap()
  }

  /// Make every later `call` fail with `err`.
  pub fn fail(&self, call: &'static str, err: ClientError) {
    self.state().failures.insert(call, err);
  }

  /// Make every later `call` take `delay` before answering.
  pub fn delay(&self, call: &'static str, delay: Duration) {
    self.state().delays.insert(call, delay);
  }

  pub fn calls(&self) -> Vec<&'static str> { self.state().calls.clone() }

  pub fn count(&self, call: &str) -> usize {
    self.state().calls.iter().filter(|c| **c == call).count()
  }

  async fn enter(&self, call: &'static str) -> Result<(), ClientError> {
    let (delay, failure) = {
      let mut state = self.state();
      state.calls.push(call);
      (
        state.delays.get(call).copied(),
        state.failures.get(call).cloned(),
      )
    };
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }
    failure.map_or(Ok(()), Err)
  }
}

impl SiteApi for FakeApi {
  async fn testimonials(
    &self,
    featured: Option<bool>,
  ) -> Result<Vec<Testimonial>, ClientError> {
    self.enter("testimonials").await?;
    Ok(
      self
        .state()
        .testimonials
        .iter()
        .filter(|t| featured.is_none_or(|f| t.featured == f))
        .cloned()
        .collect(),
    )
  }

  async fn projects(&self) -> Result<Vec<Project>, ClientError> {
    self.enter("projects").await?;
    Ok(self.state().projects.clone())
  }

  async fn blog_posts(
    &self,
    published: Option<bool>,
  ) -> Result<Vec<BlogPost>, ClientError> {
    self.enter("blog_posts").await?;
    Ok(
      self
        .state()
        .blog_posts
        .iter()
        .filter(|p| published.is_none_or(|want| p.published == want))
        .cloned()
        .collect(),
    )
  }

  async fn blog_post(&self, slug: &str) -> Result<BlogPost, ClientError> {
    self.enter("blog_post").await?;
    self
      .state()
      .blog_posts
      .iter()
      .find(|p| p.slug == slug)
      .cloned()
      .ok_or(ClientError::ServerRejected(404))
  }

  async fn summarize_blog_post(&self, slug: &str) -> Result<String, ClientError> {
    self.enter("summarize").await?;
    let mut state = self.state();
    state.summaries_made += 1;
    Ok(format!("summary {} of {slug}", state.summaries_made))
  }

  async fn jobs(
    &self,
    status: Option<JobStatus>,
  ) -> Result<Vec<JobPosting>, ClientError> {
    self.enter("jobs").await?;
    Ok(
      self
        .state()
        .jobs
        .iter()
        .filter(|j| status.is_none_or(|s| j.status == s))
        .cloned()
        .collect(),
    )
  }

  async fn submit_application(
    &self,
    payload: ApplicationPayload,
  ) -> Result<ApplicationReceipt, ClientError> {
    self.enter("submit_application").await?;
    self.state().sent_applications.push(payload);
    Ok(ApplicationReceipt {
      message:        "Application submitted successfully".into(),
      application_id: Uuid::new_v4(),
    })
  }

  async fn submit_contact(
    &self,
    message: NewContactMessage,
  ) -> Result<ContactMessage, ClientError> {
    self.enter("submit_contact").await?;
    let stored = ContactMessage {
      id:        Uuid::new_v4(),
      name:      message.name.clone(),
      email:     message.email.clone(),
      subject:   message.subject.clone(),
      message:   message.message.clone(),
      timestamp: Utc::now(),
    };
    let mut state = self.state();
    state.sent_contacts.push(message);
    state.contacts.push(stored.clone());
    Ok(stored)
  }

  async fn chat(&self, message: &str) -> Result<String, ClientError> {
    self.enter("chat").await?;
    Ok(format!("You asked: {message}"))
  }

  async fn login(
    &self,
    credentials: Credentials,
  ) -> Result<AdminIdentity, ClientError> {
    self.enter("login").await?;
    Ok(AdminIdentity {
      admin_id: "admin-1".into(),
      username: credentials.username,
    })
  }

  async fn analytics(&self) -> Result<AnalyticsSnapshot, ClientError> {
    self.enter("analytics").await?;
    Ok(self.state().analytics.clone())
  }

  async fn applications(&self) -> Result<Vec<JobApplication>, ClientError> {
    self.enter("applications").await?;
    Ok(self.state().applications.clone())
  }

  async fn set_application_status(
    &self,
    id: &str,
    status: ApplicationStatus,
  ) -> Result<(), ClientError> {
    self.enter("set_status").await?;
    let mut state = self.state();
    let app = state
      .applications
      .iter_mut()
      .find(|a| a.id.to_string() == id)
      .ok_or(ClientError::ServerRejected(404))?;
    app.status = status;
    Ok(())
  }

  async fn contacts(&self) -> Result<Vec<ContactMessage>, ClientError> {
    self.enter("contacts").await?;
    Ok(self.state().contacts.clone())
  }
}

// ─── Sample records ──────────────────────────────────────────────────────────

pub fn job(title: &str, status: JobStatus) -> JobPosting {
  JobPosting {
    id:               Uuid::new_v4(),
    title:            title.into(),
    department:       "Engineering".into(),
    location:         "Remote".into(),
    kind:             "Full-time".into(),
    description:      format!("{title} role"),
    requirements:     vec!["Rust".into()],
    responsibilities: vec![],
    status,
    posted_date:      Utc::now(),
  }
}

pub fn application(name: &str, status: ApplicationStatus) -> JobApplication {
  JobApplication {
    id:           Uuid::new_v4(),
    job_id:       Uuid::new_v4().to_string(),
    job_title:    "Rust Engineer".into(),
    name:         name.into(),
    email:        format!("{}@example.com", name.to_lowercase()),
    phone:        "555".into(),
    cover_letter: None,
    resume_text:  None,
    ai_analysis:  None,
    status,
    applied_date: Utc::now(),
  }
}

pub fn post(slug: &str, published: bool) -> BlogPost {
  BlogPost {
    id:              Uuid::new_v4(),
    title:           slug.replace('-', " "),
    slug:            slug.into(),
    author:          "Team".into(),
    content:         "First paragraph.\nSecond paragraph.".into(),
    excerpt:         None,
    featured_image:  None,
    seo_description: None,
    tags:            vec![],
    published,
    created_date:    Utc::now(),
    updated_date:    None,
  }
}

pub fn project(title: &str, category: &str, tech: &[&str]) -> Project {
  Project {
    id:              Uuid::new_v4(),
    title:           title.into(),
    description:     format!("{title} description"),
    category:        category.into(),
    technologies:    tech.iter().map(|t| t.to_string()).collect(),
    client:          None,
    image:           None,
    completion_date: None,
    featured:        false,
  }
}

pub fn testimonial(client_name: &str, featured: bool) -> Testimonial {
  Testimonial {
    id:          Uuid::new_v4(),
    client_name: client_name.into(),
    company:     "Acme".into(),
    position:    None,
    content:     "Great partner".into(),
    rating:      5,
    avatar:      None,
    featured,
  }
}

//! The `SiteApi` trait: every endpoint the site consumes.
//!
//! Views depend on this abstraction rather than on [`crate::ApiClient`], so
//! they can be driven by an in-memory fake in tests.

use std::future::Future;

use solis_core::{
  admin::{AdminIdentity, AnalyticsSnapshot, Credentials},
  careers::{ApplicationReceipt, ApplicationStatus, JobApplication, JobPosting, JobStatus},
  contact::{ContactMessage, NewContactMessage},
  content::{BlogPost, Project, Testimonial},
};

use crate::{ClientError, payload::ApplicationPayload};

/// Abstraction over the site's REST API.
///
/// All methods return `Send` futures so implementations can be shared across
/// tokio tasks.
pub trait SiteApi: Send + Sync {
  // ── Public content ────────────────────────────────────────────────────

  /// `GET /testimonials[?featured=<bool>]`
  fn testimonials(
    &self,
    featured: Option<bool>,
  ) -> impl Future<Output = Result<Vec<Testimonial>, ClientError>> + Send;

  /// `GET /projects`
  fn projects(
    &self,
  ) -> impl Future<Output = Result<Vec<Project>, ClientError>> + Send;

  /// `GET /blog[?published=<bool>]`
  fn blog_posts(
    &self,
    published: Option<bool>,
  ) -> impl Future<Output = Result<Vec<BlogPost>, ClientError>> + Send;

  /// `GET /blog/{slug}`
  fn blog_post(
    &self,
    slug: &str,
  ) -> impl Future<Output = Result<BlogPost, ClientError>> + Send;

  /// `POST /blog/{slug}/summarize`, returning the summary text.
  fn summarize_blog_post(
    &self,
    slug: &str,
  ) -> impl Future<Output = Result<String, ClientError>> + Send;

  // ── Careers ───────────────────────────────────────────────────────────

  /// `GET /jobs[?status=<status>]`
  fn jobs(
    &self,
    status: Option<JobStatus>,
  ) -> impl Future<Output = Result<Vec<JobPosting>, ClientError>> + Send;

  /// `POST /applications` (multipart)
  fn submit_application(
    &self,
    payload: ApplicationPayload,
  ) -> impl Future<Output = Result<ApplicationReceipt, ClientError>> + Send;

  // ── Visitor messages ──────────────────────────────────────────────────

  /// `POST /contact`
  fn submit_contact(
    &self,
    message: NewContactMessage,
  ) -> impl Future<Output = Result<ContactMessage, ClientError>> + Send;

  /// `POST /chat`, returning the reply text.
  fn chat(
    &self,
    message: &str,
  ) -> impl Future<Output = Result<String, ClientError>> + Send;

  // ── Admin ─────────────────────────────────────────────────────────────

  /// `POST /admin/login`
  fn login(
    &self,
    credentials: Credentials,
  ) -> impl Future<Output = Result<AdminIdentity, ClientError>> + Send;

  /// `GET /admin/analytics`
  fn analytics(
    &self,
  ) -> impl Future<Output = Result<AnalyticsSnapshot, ClientError>> + Send;

  /// `GET /applications`
  fn applications(
    &self,
  ) -> impl Future<Output = Result<Vec<JobApplication>, ClientError>> + Send;

  /// `PUT /applications/{id}/status?status=<status>`
  fn set_application_status(
    &self,
    id: &str,
    status: ApplicationStatus,
  ) -> impl Future<Output = Result<(), ClientError>> + Send;

  /// `GET /contact`
  fn contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactMessage>, ClientError>> + Send;
}

//! Async HTTP client wrapping the site's JSON/multipart API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use solis_core::{
  admin::{AdminIdentity, AnalyticsSnapshot, Credentials, LoginResponse},
  careers::{ApplicationReceipt, ApplicationStatus, JobApplication, JobPosting, JobStatus},
  contact::{ContactMessage, NewContactMessage},
  content::{BlogPost, BlogSummary, Project, Testimonial},
};
use tracing::debug;

use crate::{
  ClientError, SiteApi,
  payload::{ApplicationPayload, ChatReply, ChatRequest},
};

/// Connection settings for the site API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Origin of the backend, e.g. `https://example.com`. The `/api` prefix is
  /// appended by the client.
  pub base_url: String,
  pub timeout:  Duration,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:8000".to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Async HTTP client for the site REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| ClientError::NetworkFailure(format!("failed to build HTTP client: {e}")))?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// Send `req` and decode a JSON body. `what` names the call in logs.
  async fn fetch<T: DeserializeOwned>(
    &self,
    req: RequestBuilder,
    what: &str,
  ) -> Result<T, ClientError> {
    let resp = self.send(req, what).await?;
    resp.json().await.map_err(|e| {
      debug!(call = what, error = %e, "response body did not decode");
      ClientError::DecodeFailure(format!("{what}: {e}"))
    })
  }

  /// Send `req`, mapping transport failures and non-2xx statuses.
  async fn send(
    &self,
    req: RequestBuilder,
    what: &str,
  ) -> Result<reqwest::Response, ClientError> {
    debug!(call = what, "sending request");
    let resp = req
      .send()
      .await
      .map_err(|e| ClientError::NetworkFailure(format!("{what}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
      debug!(call = what, %status, "request rejected");
      return Err(ClientError::ServerRejected(status.as_u16()));
    }
    Ok(resp)
  }
}

/// `/blog/{slug}` with the slug escaped as one path segment.
fn blog_path(slug: &str) -> String {
  format!("/blog/{}", urlencoding::encode(slug))
}

impl SiteApi for ApiClient {
  // ── Public content ──────────────────────────────────────────────────────

  async fn testimonials(
    &self,
    featured: Option<bool>,
  ) -> Result<Vec<Testimonial>, ClientError> {
    let mut req = self.client.get(self.url("/testimonials"));
    if let Some(featured) = featured {
      req = req.query(&[("featured", featured)]);
    }
    self.fetch(req, "GET /testimonials").await
  }

  async fn projects(&self) -> Result<Vec<Project>, ClientError> {
    self
      .fetch(self.client.get(self.url("/projects")), "GET /projects")
      .await
  }

  async fn blog_posts(
    &self,
    published: Option<bool>,
  ) -> Result<Vec<BlogPost>, ClientError> {
    let mut req = self.client.get(self.url("/blog"));
    if let Some(published) = published {
      req = req.query(&[("published", published)]);
    }
    self.fetch(req, "GET /blog").await
  }

  async fn blog_post(&self, slug: &str) -> Result<BlogPost, ClientError> {
    self
      .fetch(self.client.get(self.url(&blog_path(slug))), "GET /blog/{slug}")
      .await
  }

  async fn summarize_blog_post(&self, slug: &str) -> Result<String, ClientError> {
    let path = format!("{}/summarize", blog_path(slug));
    let body: BlogSummary = self
      .fetch(self.client.post(self.url(&path)), "POST /blog/{slug}/summarize")
      .await?;
    Ok(body.summary)
  }

  // ── Careers ─────────────────────────────────────────────────────────────

  async fn jobs(
    &self,
    status: Option<JobStatus>,
  ) -> Result<Vec<JobPosting>, ClientError> {
    let mut req = self.client.get(self.url("/jobs"));
    if let Some(status) = status {
      req = req.query(&[("status", status.to_string())]);
    }
    self.fetch(req, "GET /jobs").await
  }

  async fn submit_application(
    &self,
    payload: ApplicationPayload,
  ) -> Result<ApplicationReceipt, ClientError> {
    let form = payload.into_multipart()?;
    self
      .fetch(
        self.client.post(self.url("/applications")).multipart(form),
        "POST /applications",
      )
      .await
  }

  // ── Visitor messages ────────────────────────────────────────────────────

  async fn submit_contact(
    &self,
    message: NewContactMessage,
  ) -> Result<ContactMessage, ClientError> {
    self
      .fetch(
        self.client.post(self.url("/contact")).json(&message),
        "POST /contact",
      )
      .await
  }

  async fn chat(&self, message: &str) -> Result<String, ClientError> {
    let body = ChatRequest { message: message.to_string() };
    let reply: ChatReply = self
      .fetch(self.client.post(self.url("/chat")).json(&body), "POST /chat")
      .await?;
    Ok(reply.response)
  }

  // ── Admin ───────────────────────────────────────────────────────────────

  async fn login(
    &self,
    credentials: Credentials,
  ) -> Result<AdminIdentity, ClientError> {
    let resp: LoginResponse = self
      .fetch(
        self.client.post(self.url("/admin/login")).json(&credentials),
        "POST /admin/login",
      )
      .await?;
    Ok(resp.into())
  }

  async fn analytics(&self) -> Result<AnalyticsSnapshot, ClientError> {
    self
      .fetch(
        self.client.get(self.url("/admin/analytics")),
        "GET /admin/analytics",
      )
      .await
  }

  async fn applications(&self) -> Result<Vec<JobApplication>, ClientError> {
    self
      .fetch(self.client.get(self.url("/applications")), "GET /applications")
      .await
  }

  async fn set_application_status(
    &self,
    id: &str,
    status: ApplicationStatus,
  ) -> Result<(), ClientError> {
    let path = format!("/applications/{}/status", urlencoding::encode(id));
    self
      .send(
        self
          .client
          .put(self.url(&path))
          .query(&[("status", status.to_string())]),
        "PUT /applications/{id}/status",
      )
      .await?;
    Ok(())
  }

  async fn contacts(&self) -> Result<Vec<ContactMessage>, ClientError> {
    self
      .fetch(self.client.get(self.url("/contact")), "GET /contact")
      .await
  }
}

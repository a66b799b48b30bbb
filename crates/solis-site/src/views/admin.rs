//! Admin dashboard: analytics, applications, contacts and postings.
//!
//! Only reachable through an [`AdminSession`]. The four collections are
//! fetched concurrently; a failed fetch leaves that collection as it was
//! and is named in a single notice, while the others are still applied.

use solis_client::{ClientError, SiteApi};
use solis_core::{
  admin::AnalyticsSnapshot,
  careers::{ApplicationStatus, JobApplication, JobPosting},
  contact::ContactMessage,
};
use strum::{Display, IntoEnumIterator};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::fetch;
use crate::{
  notice::Notices,
  session::{self, AdminSession, GateDecision, SessionStorage},
};

/// One of the collections the dashboard loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
  Analytics,
  Applications,
  Contacts,
  Jobs,
}

/// Which collections failed during one dashboard load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
  pub failed: Vec<Resource>,
}

impl LoadReport {
  pub fn is_complete(&self) -> bool { self.failed.is_empty() }

  fn settle<T>(
    &mut self,
    slot: &mut T,
    resource: Resource,
    result: Result<T, ClientError>,
  ) {
    match result {
      Ok(value) => *slot = value,
      Err(e) => {
        warn!(%resource, error = %e, "dashboard fetch failed");
        self.failed.push(resource);
      }
    }
  }

  fn notice(&self) -> Option<String> {
    if self.is_complete() {
      return None;
    }
    let names: Vec<_> = self.failed.iter().map(|r| r.to_string()).collect();
    Some(format!("Failed to load dashboard data ({})", names.join(", ")))
  }
}

#[derive(Debug)]
pub struct AdminDashboard {
  session:          AdminSession,
  pub analytics:    AnalyticsSnapshot,
  pub applications: Vec<JobApplication>,
  pub contacts:     Vec<ContactMessage>,
  /// Every posting, active or closed.
  pub jobs:         Vec<JobPosting>,
}

impl AdminDashboard {
  pub fn new(session: AdminSession) -> Self {
    Self {
      session,
      analytics: AnalyticsSnapshot::default(),
      applications: Vec::new(),
      contacts: Vec::new(),
      jobs: Vec::new(),
    }
  }

  /// Pass the gate and load. `Err` carries the path to redirect to; in that
  /// case no request has been made.
  pub async fn open<A: SiteApi>(
    api: &A,
    storage: &impl SessionStorage,
    notices: &mut Notices,
  ) -> Result<Self, &'static str> {
    match session::check(storage) {
      GateDecision::Granted(session) => {
        let mut dashboard = Self::new(session);
        dashboard.load(api, notices).await;
        Ok(dashboard)
      }
      GateDecision::Redirect(path) => {
        debug!(path, "no admin session; redirecting");
        Err(path)
      }
    }
  }

  pub fn session(&self) -> &AdminSession { &self.session }

  /// Fetch all four collections concurrently and apply whatever succeeded.
  pub async fn load<A: SiteApi>(
    &mut self,
    api: &A,
    notices: &mut Notices,
  ) -> LoadReport {
    let (analytics, applications, contacts, jobs) = tokio::join!(
      api.analytics(),
      api.applications(),
      api.contacts(),
      api.jobs(None),
    );

    let mut report = LoadReport::default();
    report.settle(&mut self.analytics, Resource::Analytics, analytics);
    report.settle(&mut self.applications, Resource::Applications, applications);
    report.settle(&mut self.contacts, Resource::Contacts, contacts);
    report.settle(&mut self.jobs, Resource::Jobs, jobs);

    if let Some(message) = report.notice() {
      notices.error(message);
    }
    report
  }

  pub fn application(&self, id: Uuid) -> Option<&JobApplication> {
    self.applications.iter().find(|a| a.id == id)
  }

  /// False when the application is unknown or already has `status`.
  pub fn can_set_status(&self, id: Uuid, status: ApplicationStatus) -> bool {
    self.application(id).is_some_and(|a| a.status != status)
  }

  /// Number of applications per status, in status order.
  pub fn status_counts(&self) -> Vec<(ApplicationStatus, usize)> {
    ApplicationStatus::iter()
      .map(|s| {
        (s, self.applications.iter().filter(|a| a.status == s).count())
      })
      .collect()
  }

  /// Move one application to `status`, then reload the applications from
  /// the server. On failure the displayed status is left alone.
  pub async fn set_status<A: SiteApi>(
    &mut self,
    api: &A,
    id: Uuid,
    status: ApplicationStatus,
    notices: &mut Notices,
  ) -> bool {
    if let Err(e) = api.set_application_status(&id.to_string(), status).await {
      notices.failure("Failed to update status", &e);
      return false;
    }
    info!(%id, %status, "application status updated");
    notices.success("Application status updated");
    self.reload_applications(api, notices).await;
    true
  }

  async fn reload_applications<A: SiteApi>(
    &mut self,
    api: &A,
    notices: &mut Notices,
  ) {
    if let Some(applications) = fetch(
      notices,
      "Failed to load dashboard data (applications)",
      api.applications(),
    )
    .await
    {
      self.applications = applications;
    }
  }
}

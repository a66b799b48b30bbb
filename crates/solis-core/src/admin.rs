//! Administrator identity and analytics.

use serde::{Deserialize, Serialize};

/// The persisted record of the logged-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
  pub admin_id: String,
  pub username: String,
}

/// JSON body of `POST /admin/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .finish_non_exhaustive()
  }
}

/// Response body of a successful `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
  #[serde(default)]
  pub message:  String,
  pub admin_id: String,
  pub username: String,
}

impl From<LoginResponse> for AdminIdentity {
  fn from(r: LoginResponse) -> Self {
    AdminIdentity { admin_id: r.admin_id, username: r.username }
  }
}

/// Aggregate counts, recomputed by the server on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
  #[serde(default)]
  pub total_contacts:     u64,
  #[serde(default)]
  pub total_applications: u64,
  /// Active postings only.
  #[serde(default)]
  pub total_jobs:         u64,
  /// Published posts only.
  #[serde(default)]
  pub total_blogs:        u64,
  #[serde(default)]
  pub total_projects:     u64,
  pub ai_summary:         Option<String>,
}

//! Admin session gate.
//!
//! The logged-in administrator is remembered as one JSON record on disk.
//! [`check`] reads it once and either hands back an [`AdminSession`] or the
//! login path to redirect to. Protected views can only be opened with a
//! session.
//!
//! The gate trusts the record's presence alone. Nothing about it is verified
//! with the server, so anyone able to write the file is treated as an admin.

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use solis_client::SiteApi;
use solis_core::admin::{AdminIdentity, Credentials};
use thiserror::Error;
use tracing::{info, warn};

use crate::notice::Notices;

pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Error)]
pub enum SessionError {
  #[error("session storage io: {0}")]
  Io(#[from] io::Error),

  #[error("session record is corrupt: {0}")]
  Corrupt(#[from] serde_json::Error),
}

// ─── Storage ─────────────────────────────────────────────────────────────────

/// Where the admin record is persisted.
pub trait SessionStorage {
  fn load(&self) -> Result<Option<AdminIdentity>, SessionError>;
  fn save(&self, identity: &AdminIdentity) -> Result<(), SessionError>;
  fn clear(&self) -> Result<(), SessionError>;
}

/// One JSON file holding the [`AdminIdentity`].
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
  path: PathBuf,
}

impl FileSessionStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }
}

impl SessionStorage for FileSessionStorage {
  fn load(&self) -> Result<Option<AdminIdentity>, SessionError> {
    match fs::read_to_string(&self.path) {
      Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  fn save(&self, identity: &AdminIdentity) -> Result<(), SessionError> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent)?;
    }
    fs::write(&self.path, serde_json::to_vec_pretty(identity)?)?;
    Ok(())
  }

  fn clear(&self) -> Result<(), SessionError> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Proof that the gate was passed. Protected views take one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
  identity: AdminIdentity,
}

impl AdminSession {
  pub fn identity(&self) -> &AdminIdentity { &self.identity }

  pub fn username(&self) -> &str { &self.identity.username }

  /// Clear the persisted record and return the path to redirect to.
  pub fn logout(
    self,
    storage: &impl SessionStorage,
    notices: &mut Notices,
  ) -> &'static str {
    match storage.clear() {
      Ok(()) => {
        info!(username = %self.identity.username, "admin logged out");
        notices.success("Logged out successfully");
      }
      Err(e) => {
        warn!(error = %e, "could not clear admin session");
        notices.error("Failed to log out");
      }
    }
    LOGIN_PATH
  }
}

/// Result of the gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
  Granted(AdminSession),
  /// Render nothing and navigate here.
  Redirect(&'static str),
}

/// Read the persisted record once. An unreadable record counts as absent.
pub fn check(storage: &impl SessionStorage) -> GateDecision {
  match storage.load() {
    Ok(Some(identity)) => GateDecision::Granted(AdminSession { identity }),
    Ok(None) => GateDecision::Redirect(LOGIN_PATH),
    Err(e) => {
      warn!(error = %e, "ignoring unreadable admin session");
      GateDecision::Redirect(LOGIN_PATH)
    }
  }
}

/// `POST /admin/login`; on success persist the identity and open a session.
pub async fn login<A: SiteApi>(
  api: &A,
  storage: &impl SessionStorage,
  credentials: Credentials,
  notices: &mut Notices,
) -> Option<AdminSession> {
  let identity = match api.login(credentials).await {
    Ok(identity) => identity,
    Err(e) => {
      notices.failure("Invalid credentials", &e);
      return None;
    }
  };
  if let Err(e) = storage.save(&identity) {
    warn!(error = %e, "could not persist admin session");
    notices.error("Failed to save login");
    return None;
  }
  info!(username = %identity.username, "admin logged in");
  notices.success("Login successful");
  Some(AdminSession { identity })
}

#[cfg(test)]
pub(crate) fn session_for(username: &str) -> AdminSession {
  AdminSession {
    identity: AdminIdentity {
      admin_id: format!("id-{username}"),
      username: username.to_string(),
    },
  }
}

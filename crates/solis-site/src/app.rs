//! Terminal admin dashboard state and key dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use solis_client::ApiClient;
use solis_core::careers::{ApplicationStatus, JobApplication};
use solis_site::{
  Notices,
  session::FileSessionStorage,
  views::admin::AdminDashboard,
};
use strum::{Display, EnumIter};

// ─── Tab ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Tab {
  Applications,
  Contacts,
  Jobs,
}

impl Tab {
  fn next(self) -> Self {
    match self {
      Tab::Applications => Tab::Contacts,
      Tab::Contacts => Tab::Jobs,
      Tab::Jobs => Tab::Applications,
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level dashboard state.
pub struct DashboardApp {
  pub dashboard: AdminDashboard,

  /// Tab with keyboard focus.
  pub tab: Tab,

  /// Cursor within the focused tab's list.
  pub cursor: usize,

  /// Notices not yet dismissed; the status bar shows the newest.
  pub notices: Notices,

  client:  ApiClient,
  storage: FileSessionStorage,
}

impl DashboardApp {
  pub fn new(
    dashboard: AdminDashboard,
    client: ApiClient,
    storage: FileSessionStorage,
    notices: Notices,
  ) -> Self {
    Self {
      dashboard,
      tab: Tab::Applications,
      cursor: 0,
      notices,
      client,
      storage,
    }
  }

  fn tab_len(&self) -> usize {
    match self.tab {
      Tab::Applications => self.dashboard.applications.len(),
      Tab::Contacts => self.dashboard.contacts.len(),
      Tab::Jobs => self.dashboard.jobs.len(),
    }
  }

  /// The application under the cursor, when the applications tab is focused.
  pub fn cursor_application(&self) -> Option<&JobApplication> {
    if self.tab != Tab::Applications {
      return None;
    }
    self.dashboard.applications.get(self.cursor)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  ///
  /// Any key dismisses the notice on the status bar before it acts; `Esc`
  /// only dismisses.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    if let Some(newest) = self.notices.len().checked_sub(1) {
      self.notices.dismiss(newest);
    }

    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Esc => {}

      KeyCode::Tab => {
        self.tab = self.tab.next();
        self.cursor = 0;
      }

      KeyCode::Down | KeyCode::Char('j') => {
        if self.cursor + 1 < self.tab_len() {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }

      KeyCode::Char('r') => self.set_status(ApplicationStatus::Reviewing).await,
      KeyCode::Char('s') => {
        self.set_status(ApplicationStatus::Shortlisted).await
      }
      KeyCode::Char('x') => self.set_status(ApplicationStatus::Rejected).await,
      KeyCode::Char('p') => self.set_status(ApplicationStatus::Pending).await,

      KeyCode::Char('g') => {
        self.dashboard.load(&self.client, &mut self.notices).await;
        self.cursor = self.cursor.min(self.tab_len().saturating_sub(1));
      }

      KeyCode::Char('L') => {
        self
          .dashboard
          .session()
          .clone()
          .logout(&self.storage, &mut self.notices);
        return false;
      }

      _ => {}
    }
    true
  }

  async fn set_status(&mut self, status: ApplicationStatus) {
    let Some(id) = self.cursor_application().map(|a| a.id) else {
      return;
    };
    if !self.dashboard.can_set_status(id, status) {
      self.notices.info(format!("Application is already {status}"));
      return;
    }
    self
      .dashboard
      .set_status(&self.client, id, status, &mut self.notices)
      .await;
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use chrono::Utc;
  use solis_client::ApiConfig;
  use solis_core::admin::AdminIdentity;
  use solis_site::session::{self, GateDecision, SessionStorage};
  use uuid::Uuid;

  use super::*;

  fn pending_application() -> JobApplication {
    JobApplication {
      id:           Uuid::new_v4(),
      job_id:       Uuid::new_v4().to_string(),
      job_title:    "Rust Engineer".into(),
      name:         "Ada".into(),
      email:        "ada@example.com".into(),
      phone:        "555".into(),
      cover_letter: None,
      resume_text:  None,
      ai_analysis:  None,
      status:       ApplicationStatus::Pending,
      applied_date: Utc::now(),
    }
  }

  /// A dashboard on one pending application. Nothing listens on the API
  /// address, so a key that reached the network would queue an error.
  fn app(dir: &tempfile::TempDir) -> DashboardApp {
    let storage = FileSessionStorage::new(dir.path().join("admin.json"));
    storage
      .save(&AdminIdentity { admin_id: "a1".into(), username: "root".into() })
      .unwrap();
    let GateDecision::Granted(session) = session::check(&storage) else {
      panic!("expected a session");
    };
    let client = ApiClient::new(ApiConfig {
      base_url: "http://127.0.0.1:9".into(),
      timeout:  Duration::from_secs(1),
    })
    .unwrap();

    let mut dashboard = AdminDashboard::new(session);
    dashboard.applications.push(pending_application());
    DashboardApp::new(dashboard, client, storage, Notices::new())
  }

  fn press(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  #[tokio::test]
  async fn repeated_notices_do_not_pile_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(&dir);

    for _ in 0..50 {
      assert!(app.handle_key(press(KeyCode::Char('p'))).await);
    }
    assert_eq!(app.notices.len(), 1);
    assert_eq!(
      app.notices.latest().unwrap().message,
      "Application is already pending"
    );
    assert!(!app.notices.has_errors());

    assert!(app.handle_key(press(KeyCode::Esc)).await);
    assert!(app.notices.is_empty());
  }

  #[tokio::test]
  async fn any_key_clears_the_notice_and_still_acts() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(&dir);
    app.notices.info("Loaded");

    assert!(app.handle_key(press(KeyCode::Tab)).await);
    assert!(app.notices.is_empty());
    assert_eq!(app.tab, Tab::Contacts);
  }

  #[tokio::test]
  async fn esc_uncovers_older_notices_one_at_a_time() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(&dir);
    app.notices.error("Failed to load contacts");
    app.notices.error("Failed to load jobs");

    app.handle_key(press(KeyCode::Esc)).await;
    assert_eq!(app.notices.latest().unwrap().message, "Failed to load contacts");
    app.handle_key(press(KeyCode::Esc)).await;
    assert!(app.notices.is_empty());
  }
}

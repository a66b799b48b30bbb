//! TUI rendering for the admin dashboard.

pub mod applications;
pub mod records;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};
use solis_site::NoticeLevel;
use strum::IntoEnumIterator;

use crate::app::{DashboardApp, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &DashboardApp) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(5), // analytics
      Constraint::Length(1), // tabs
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(f.area());

  draw_header(f, rows[0], app);
  draw_analytics(f, rows[1], app);
  draw_tabs(f, rows[2], app);
  match app.tab {
    Tab::Applications => applications::draw(f, rows[3], app),
    Tab::Contacts => records::draw_contacts(f, rows[3], app),
    Tab::Jobs => records::draw_jobs(f, rows[3], app),
  }
  draw_status(f, rows[4], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    format!(" solis admin  {}", app.dashboard.session().username()),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  let pad = area
    .width
    .saturating_sub(left.content.len() as u16)
    .saturating_sub(right.content.len() as u16);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Analytics strip ──────────────────────────────────────────────────────────

fn draw_analytics(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let a = &app.dashboard.analytics;
  let label = Style::default().fg(Color::DarkGray);
  let value = Style::default().add_modifier(Modifier::BOLD);

  let mut counts = Vec::new();
  for (name, n) in [
    ("contacts", a.total_contacts),
    ("applications", a.total_applications),
    ("active jobs", a.total_jobs),
    ("posts", a.total_blogs),
    ("projects", a.total_projects),
  ] {
    counts.push(Span::styled(n.to_string(), value));
    counts.push(Span::styled(format!(" {name}   "), label));
  }

  let summary = a
    .ai_summary
    .as_deref()
    .unwrap_or("No summary available.");

  let block = Block::default()
    .title(" Analytics ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  f.render_widget(
    Paragraph::new(vec![
      Line::from(counts),
      Line::from(Span::styled(summary, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true })
    .block(block),
    area,
  );
}

// ─── Tabs ─────────────────────────────────────────────────────────────────────

fn draw_tabs(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let d = &app.dashboard;
  let titles: Vec<_> = Tab::iter()
    .map(|t| {
      let n = match t {
        Tab::Applications => d.applications.len(),
        Tab::Contacts => d.contacts.len(),
        Tab::Jobs => d.jobs.len(),
      };
      format!("{t} ({n})")
    })
    .collect();
  let selected = Tab::iter().position(|t| t == app.tab).unwrap_or(0);

  f.render_widget(
    Tabs::new(titles)
      .select(selected)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
    area,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let hints = match app.tab {
    Tab::Applications => {
      "Tab switch  jk move  r review  s shortlist  x reject  p pending  g \
       reload  L logout  q quit"
    }
    _ => "Tab switch  jk move  g reload  L logout  q quit",
  };

  let (text, color) = match app.notices.latest() {
    Some(n) => (
      format!("{}  (any key dismisses)", n.message),
      match n.level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Error => Color::Red,
      },
    ),
    None => (hints.to_string(), Color::DarkGray),
  };

  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      format!(" {text}"),
      Style::default().fg(color),
    ))),
    area,
  );
}

//! Read-only lists: contact messages and job postings.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::DashboardApp;

fn block(title: String) -> Block<'static> {
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray))
}

fn render(f: &mut Frame, area: Rect, title: String, items: Vec<ListItem>, cursor: usize) {
  let mut state = ListState::default();
  state.select(if items.is_empty() { None } else { Some(cursor) });
  f.render_stateful_widget(
    List::new(items).block(block(title)).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    area,
    &mut state,
  );
}

pub fn draw_contacts(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let contacts = &app.dashboard.contacts;
  let dim = Style::default().fg(Color::DarkGray);
  let items = contacts
    .iter()
    .map(|c| {
      ListItem::new(vec![
        Line::from(vec![
          Span::styled(c.timestamp.format("%Y-%m-%d  ").to_string(), dim),
          Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
          Span::styled(format!("  <{}>", c.email), dim),
        ]),
        Line::from(format!(
          "  {}{}",
          c.subject.as_deref().map(|s| format!("{s}: ")).unwrap_or_default(),
          c.message
        )),
      ])
    })
    .collect();
  render(f, area, format!(" Contacts ({}) ", contacts.len()), items, app.cursor);
}

pub fn draw_jobs(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let jobs = &app.dashboard.jobs;
  let items = jobs
    .iter()
    .map(|j| {
      let status = if j.is_active() {
        Style::default().fg(Color::Green)
      } else {
        Style::default().fg(Color::DarkGray)
      };
      ListItem::new(Line::from(vec![
        Span::styled(format!("{:<8}", j.status.to_string()), status),
        Span::raw(format!("{}  ", j.title)),
        Span::styled(
          format!("{} · {} · {}", j.department, j.location, j.kind),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();
  render(f, area, format!(" Jobs ({}) ", jobs.len()), items, app.cursor);
}

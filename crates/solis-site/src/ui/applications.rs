//! Applications pane: list on the left, the selected application on the right.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use solis_core::careers::{ApplicationStatus, JobApplication};

use crate::app::DashboardApp;

fn status_color(status: ApplicationStatus) -> Color {
  match status {
    ApplicationStatus::Pending => Color::Yellow,
    ApplicationStatus::Reviewing => Color::Blue,
    ApplicationStatus::Shortlisted => Color::Green,
    ApplicationStatus::Rejected => Color::Red,
  }
}

pub fn draw(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);

  draw_list(f, cols[0], app);
  draw_detail(f, cols[1], app.cursor_application());
}

fn draw_list(f: &mut Frame, area: Rect, app: &DashboardApp) {
  let counts: Vec<_> = app
    .dashboard
    .status_counts()
    .into_iter()
    .filter(|(_, n)| *n > 0)
    .map(|(s, n)| format!("{n} {s}"))
    .collect();
  let block = Block::default()
    .title(format!(" Applications  {} ", counts.join(" · ")))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = app
    .dashboard
    .applications
    .iter()
    .map(|a| {
      ListItem::new(Line::from(vec![
        Span::styled(
          format!("{:<12}", a.status.to_string()),
          Style::default().fg(status_color(a.status)),
        ),
        Span::raw(format!("{}  ", a.name)),
        Span::styled(a.job_title.clone(), Style::default().fg(Color::DarkGray)),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(if items.is_empty() { None } else { Some(app.cursor) });

  f.render_stateful_widget(
    List::new(items).block(block).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    area,
    &mut state,
  );
}

fn draw_detail(f: &mut Frame, area: Rect, application: Option<&JobApplication>) {
  let block = Block::default()
    .title(" Detail ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let Some(a) = application else {
    f.render_widget(
      Paragraph::new(Span::styled(
        "No applications yet.",
        Style::default().fg(Color::DarkGray),
      ))
      .block(block),
      area,
    );
    return;
  };

  let label = Style::default().fg(Color::DarkGray);
  let mut lines = vec![
    Line::from(Span::styled(
      a.name.clone(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(vec![Span::styled("position  ", label), Span::raw(&a.job_title)]),
    Line::from(vec![Span::styled("email     ", label), Span::raw(&a.email)]),
    Line::from(vec![Span::styled("phone     ", label), Span::raw(&a.phone)]),
    Line::from(vec![
      Span::styled("applied   ", label),
      Span::raw(a.applied_date.format("%Y-%m-%d").to_string()),
    ]),
    Line::from(vec![
      Span::styled("status    ", label),
      Span::styled(
        a.status.to_string(),
        Style::default().fg(status_color(a.status)),
      ),
    ]),
  ];

  if let Some(cover) = a.cover_letter.as_deref().filter(|c| !c.is_empty()) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Cover letter", label)));
    lines.push(Line::from(cover));
  }
  if let Some(analysis) = a.analysis_text() {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Resume analysis", label)));
    lines.extend(analysis.lines().map(Line::from));
  }

  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
    area,
  );
}

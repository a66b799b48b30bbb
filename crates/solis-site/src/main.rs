//! `solis`: command-line client for the Solis site.
//!
//! # Usage
//!
//! ```
//! solis jobs
//! solis apply <JOB_ID> --name Ada --email ada@example.com --phone 555 --resume cv.pdf
//! solis blog show rust-in-production --summarize
//! solis admin login --username admin
//! solis admin dashboard
//! ```

mod app;
mod ui;

use std::{
  io,
  path::{Path, PathBuf},
  process::ExitCode,
  time::Duration,
};

use anyhow::{Context, Result};
use app::DashboardApp;
use clap::{Parser, Subcommand};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use solis_client::ApiClient;
use solis_core::{admin::Credentials, careers::ApplicationStatus};
use solis_site::{
  Notices,
  config::SiteConfig,
  session::{self, FileSessionStorage, GateDecision},
  submit::SubmitOutcome,
  views::{
    admin::AdminDashboard,
    blog::{BlogListView, BlogPostView},
    careers::CareersView,
    chat::ChatView,
    contact::ContactView,
    home::HomeView,
    projects::ProjectsView,
  },
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "solis", about = "Command-line client for the Solis site")]
struct Cli {
  /// Path to a TOML config file (base_url, timeout_secs, session_path).
  #[arg(short, long, value_name = "FILE", default_value = "solis.toml")]
  config: PathBuf,

  /// Server origin; overrides the config file and environment.
  #[arg(long)]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Featured testimonials from the landing page.
  Testimonials,
  /// Open positions.
  Jobs,
  /// Apply for an open position.
  Apply {
    job_id:       Uuid,
    #[arg(long)]
    name:         String,
    #[arg(long)]
    email:        String,
    #[arg(long)]
    phone:        String,
    #[arg(long, default_value = "")]
    cover_letter: String,
    /// PDF, DOCX or DOC, at most 5 MB.
    #[arg(long, value_name = "FILE")]
    resume:       PathBuf,
  },
  /// Send a message through the contact form.
  Contact {
    #[arg(long)]
    name:    String,
    #[arg(long)]
    email:   String,
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long)]
    message: String,
  },
  Blog {
    #[command(subcommand)]
    command: BlogCommand,
  },
  /// Portfolio, optionally filtered.
  Projects {
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "")]
    search:   String,
  },
  /// Ask the site assistant a question.
  Chat { message: String },
  Admin {
    #[command(subcommand)]
    command: AdminCommand,
  },
}

#[derive(Subcommand, Debug)]
enum BlogCommand {
  /// Published posts.
  List,
  /// One post by slug.
  Show {
    slug:      String,
    /// Also request an AI summary of the post.
    #[arg(long)]
    summarize: bool,
  },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
  Login {
    #[arg(long)]
    username: String,
    #[arg(long, env = "SOLIS_ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
  },
  Logout,
  /// Interactive terminal dashboard.
  Dashboard,
  /// Move an application to pending, reviewing, shortlisted or rejected.
  SetStatus {
    id:     Uuid,
    status: ApplicationStatus,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  let interactive = matches!(
    cli.command,
    Command::Admin { command: AdminCommand::Dashboard }
  );
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(
          if interactive { LevelFilter::WARN } else { LevelFilter::INFO }.into(),
        )
        .from_env_lossy(),
    )
    .init();

  let mut settings =
    SiteConfig::load(&cli.config).context("failed to load configuration")?;
  settings.override_base_url(cli.url);
  let client =
    ApiClient::new(settings.api_config()).context("failed to build HTTP client")?;
  let storage = FileSessionStorage::new(settings.session_path());

  let mut notices = Notices::new();
  let result = run(cli.command, &client, &storage, &mut notices).await;

  let failed = notices.has_errors();
  for notice in notices.drain() {
    eprintln!("[{}] {}", notice.level, notice.message);
  }
  result?;
  Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn run(
  command: Command,
  client: &ApiClient,
  storage: &FileSessionStorage,
  notices: &mut Notices,
) -> Result<()> {
  match command {
    Command::Testimonials => {
      let mut view = HomeView::new();
      view.load(client, notices).await;
      for t in &view.testimonials {
        println!("\"{}\"", t.content);
        println!("  {}, {} ({}/5)", t.client_name, t.company, t.rating);
      }
    }

    Command::Jobs => {
      let mut view = CareersView::new();
      view.load(client, notices).await;
      for j in &view.jobs {
        println!("{}  {}", j.id, j.title);
        println!("  {} · {} · {}", j.department, j.location, j.kind);
      }
    }

    Command::Apply { job_id, name, email, phone, cover_letter, resume } => {
      let mut view = CareersView::new();
      view.load(client, notices).await;
      view.select_job(job_id);
      let bytes = std::fs::read(&resume)
        .with_context(|| format!("failed to read resume {}", resume.display()))?;
      if !view.attach_resume(&file_name(&resume), bytes, notices) {
        return Ok(());
      }
      let fields = view.form.fields_mut();
      fields.name = name;
      fields.email = email;
      fields.phone = phone;
      fields.cover_letter = cover_letter;
      if let SubmitOutcome::Sent(receipt) = view.submit(client, notices).await {
        println!("application {}", receipt.application_id);
      }
    }

    Command::Contact { name, email, subject, message } => {
      let mut view = ContactView::new();
      let fields = view.form.fields_mut();
      fields.name = name;
      fields.email = email;
      fields.subject = subject;
      fields.message = message;
      view.submit(client, notices).await;
    }

    Command::Blog { command: BlogCommand::List } => {
      let mut view = BlogListView::new();
      view.load(client, notices).await;
      for p in &view.posts {
        println!(
          "{}  {}  {}",
          p.created_date.format("%Y-%m-%d"),
          p.slug,
          p.title
        );
      }
    }

    Command::Blog { command: BlogCommand::Show { slug, summarize } } => {
      let mut view = BlogPostView::new();
      view.open(client, &slug, notices).await;
      let Some(post) = view.post() else {
        return Ok(());
      };
      println!("{}", post.title);
      println!("by {} on {}\n", post.author, post.created_date.format("%Y-%m-%d"));
      for paragraph in post.paragraphs() {
        println!("{paragraph}\n");
      }
      if summarize && view.generate_summary(client, notices).await {
        println!("Summary:\n{}", view.summary().unwrap_or_default());
      }
    }

    Command::Projects { category, search } => {
      let mut view = ProjectsView::new();
      view.load(client, notices).await;
      view.set_category(&category);
      view.set_search(search);
      println!("categories: {}", view.categories().join(", "));
      println!("showing: {}", view.filter.category.label());
      for p in view.visible() {
        println!("{}  [{}]  {}", p.title, p.category, p.technologies.join(", "));
      }
    }

    Command::Chat { message } => {
      let mut view = ChatView::new();
      view.send(client, &message, notices).await;
      if let Some(line) = view.transcript().last() {
        println!("{}", line.text);
      }
    }

    Command::Admin { command } => admin(command, client, storage, notices).await?,
  }
  Ok(())
}

async fn admin(
  command: AdminCommand,
  client: &ApiClient,
  storage: &FileSessionStorage,
  notices: &mut Notices,
) -> Result<()> {
  match command {
    AdminCommand::Login { username, password } => {
      let credentials = Credentials { username, password };
      if let Some(session) =
        session::login(client, storage, credentials, notices).await
      {
        println!("logged in as {}", session.username());
      }
    }

    AdminCommand::Logout => match session::check(storage) {
      GateDecision::Granted(session) => {
        session.logout(storage, notices);
      }
      GateDecision::Redirect(_) => notices.info("Not logged in"),
    },

    AdminCommand::Dashboard => {
      match AdminDashboard::open(client, storage, notices).await {
        Ok(dashboard) => {
          let app = DashboardApp::new(
            dashboard,
            client.clone(),
            storage.clone(),
            std::mem::take(notices),
          );
          *notices = run_dashboard(app).await?;
        }
        Err(path) => not_logged_in(path, notices),
      }
    }

    AdminCommand::SetStatus { id, status } => match session::check(storage) {
      GateDecision::Granted(session) => {
        let mut dashboard = AdminDashboard::new(session);
        if dashboard.set_status(client, id, status, notices).await
          && let Some(a) = dashboard.application(id)
        {
          println!("{}  {}  {}", a.id, a.name, a.status);
        }
      }
      GateDecision::Redirect(path) => not_logged_in(path, notices),
    },
  }
  Ok(())
}

fn not_logged_in(path: &str, notices: &mut Notices) {
  notices.error(format!("Not logged in ({path}); run `solis admin login`"));
}

fn file_name(path: &Path) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default()
}

// ─── Terminal dashboard ───────────────────────────────────────────────────────

/// Run the dashboard until the user quits; hands back the notices raised.
async fn run_dashboard(mut app: DashboardApp) -> Result<Notices> {
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result.map(|()| app.notices)
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut DashboardApp,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key).await
    {
      break;
    }
  }
  Ok(())
}

//! Read-only site content: blog posts, projects, testimonials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Blog ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
  pub id:              Uuid,
  pub title:           String,
  /// Unique; the lookup key for `GET /blog/{slug}`.
  pub slug:            String,
  pub author:          String,
  /// Plain text, one paragraph per line.
  pub content:         String,
  pub excerpt:         Option<String>,
  pub featured_image:  Option<String>,
  pub seo_description: Option<String>,
  #[serde(default)]
  pub tags:            Vec<String>,
  #[serde(default)]
  pub published:       bool,
  pub created_date:    DateTime<Utc>,
  pub updated_date:    Option<DateTime<Utc>>,
}

impl BlogPost {
  /// Non-empty lines of `content`.
  pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
    self
      .content
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
  }
}

/// Response body of `POST /blog/{slug}/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSummary {
  pub summary: String,
}

// ─── Projects ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
  pub id:              Uuid,
  pub title:           String,
  pub description:     String,
  pub category:        String,
  #[serde(default)]
  pub technologies:    Vec<String>,
  pub client:          Option<String>,
  pub image:           Option<String>,
  pub completion_date: Option<String>,
  #[serde(default)]
  pub featured:        bool,
}

// ─── Testimonials ────────────────────────────────────────────────────────────

fn default_rating() -> u8 { 5 }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
  pub id:          Uuid,
  pub client_name: String,
  pub company:     String,
  pub position:    Option<String>,
  pub content:     String,
  #[serde(default = "default_rating")]
  pub rating:      u8,
  pub avatar:      Option<String>,
  #[serde(default)]
  pub featured:    bool,
}

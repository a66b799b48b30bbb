//! Blog index and single-post pages.

use solis_client::SiteApi;
use solis_core::content::BlogPost;

use super::fetch;
use crate::notice::Notices;

// ─── Index ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct BlogListView {
  /// Published posts, in server order.
  pub posts: Vec<BlogPost>,
}

impl BlogListView {
  pub fn new() -> Self { Self::default() }

  pub async fn load<A: SiteApi>(&mut self, api: &A, notices: &mut Notices) {
    if let Some(posts) =
      fetch(notices, "Failed to load blog posts", api.blog_posts(Some(true)))
        .await
    {
      self.posts = posts;
    }
  }
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// One post looked up by slug, plus its on-demand summary.
///
/// `post` stays `None` when the lookup fails; the page renders nothing in
/// that state.
#[derive(Debug, Default)]
pub struct BlogPostView {
  slug:        Option<String>,
  post:        Option<BlogPost>,
  summary:     Option<String>,
  summarizing: bool,
}

impl BlogPostView {
  pub fn new() -> Self { Self::default() }

  pub fn slug(&self) -> Option<&str> { self.slug.as_deref() }

  pub fn post(&self) -> Option<&BlogPost> { self.post.as_ref() }

  pub fn summary(&self) -> Option<&str> { self.summary.as_deref() }

  /// While true the summary trigger is disabled.
  pub fn is_summarizing(&self) -> bool { self.summarizing }

  /// Activate the view for `slug`. Re-opening the slug that is already
  /// loaded does nothing; a different slug drops the old post and summary.
  pub async fn open<A: SiteApi>(
    &mut self,
    api: &A,
    slug: &str,
    notices: &mut Notices,
  ) {
    if self.slug.as_deref() == Some(slug) && self.post.is_some() {
      return;
    }
    self.slug = Some(slug.to_string());
    self.post = None;
    self.summary = None;
    self.post = fetch(notices, "Blog post not found", api.blog_post(slug)).await;
  }

  /// Ask the server for a summary of the open post. The newest summary
  /// replaces the previous one; a failure keeps it.
  pub async fn generate_summary<A: SiteApi>(
    &mut self,
    api: &A,
    notices: &mut Notices,
  ) -> bool {
    if self.summarizing {
      return false;
    }
    let Some(slug) = self.post.as_ref().map(|p| p.slug.clone()) else {
      return false;
    };

    self.summarizing = true;
    let summary = fetch(
      notices,
      "Failed to generate summary",
      api.summarize_blog_post(&slug),
    )
    .await;
    self.summarizing = false;

    match summary {
      Some(summary) => {
        self.summary = Some(summary);
        true
      }
      None => false,
    }
  }
}

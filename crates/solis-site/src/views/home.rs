//! Landing page: featured testimonials.

use solis_client::SiteApi;
use solis_core::content::Testimonial;

use super::fetch;
use crate::notice::Notices;

/// How many featured testimonials the landing page shows.
pub const FEATURED_LIMIT: usize = 3;

#[derive(Debug, Default)]
pub struct HomeView {
  pub testimonials: Vec<Testimonial>,
}

impl HomeView {
  pub fn new() -> Self { Self::default() }

  pub async fn load<A: SiteApi>(&mut self, api: &A, notices: &mut Notices) {
    if let Some(mut featured) = fetch(
      notices,
      "Failed to load testimonials",
      api.testimonials(Some(true)),
    )
    .await
    {
      featured.truncate(FEATURED_LIMIT);
      self.testimonials = featured;
    }
  }
}

#[cfg(test)]
mod tests {
  use solis_client::ClientError;

  use super::*;
  use crate::fake::{FakeApi, testimonial};

  #[tokio::test]
  async fn keeps_first_three_featured() {
    let api = FakeApi::with(|s| {
      s.testimonials = vec![
        testimonial("Ann", true),
        testimonial("Bob", false),
        testimonial("Cid", true),
        testimonial("Dee", true),
        testimonial("Eve", true),
      ];
    });
    let mut notices = Notices::new();
    let mut view = HomeView::new();
    view.load(&api, &mut notices).await;

    let names: Vec<_> =
      view.testimonials.iter().map(|t| t.client_name.as_str()).collect();
    assert_eq!(names, ["Ann", "Cid", "Dee"]);
    assert!(notices.is_empty());
  }

  #[tokio::test]
  async fn failed_reload_keeps_previous_list() {
    let api = FakeApi::with(|s| s.testimonials = vec![testimonial("Ann", true)]);
    let mut notices = Notices::new();
    let mut view = HomeView::new();
    view.load(&api, &mut notices).await;

    api.fail("testimonials", ClientError::NetworkFailure("down".into()));
    view.load(&api, &mut notices).await;
    assert_eq!(view.testimonials.len(), 1);
    assert_eq!(notices.latest().unwrap().message, "Failed to load testimonials");
  }
}

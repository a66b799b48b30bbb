//! Portfolio page. Fetches every project once and filters locally.

use solis_client::SiteApi;
use solis_core::{
  content::Project,
  filter::{CategoryFilter, ProjectFilter, category_choices},
};

use super::fetch;
use crate::notice::Notices;

#[derive(Debug, Default)]
pub struct ProjectsView {
  pub projects: Vec<Project>,
  pub filter:   ProjectFilter,
}

impl ProjectsView {
  pub fn new() -> Self { Self::default() }

  pub async fn load<A: SiteApi>(&mut self, api: &A, notices: &mut Notices) {
    if let Some(projects) =
      fetch(notices, "Failed to load projects", api.projects()).await
    {
      self.projects = projects;
    }
  }

  /// Selector labels, starting with `"all"`.
  pub fn categories(&self) -> Vec<String> { category_choices(&self.projects) }

  pub fn set_category(&mut self, label: &str) {
    self.filter.category = CategoryFilter::from_label(label);
  }

  pub fn set_search(&mut self, search: impl Into<String>) {
    self.filter.search = search.into();
  }

  pub fn visible(&self) -> Vec<&Project> { self.filter.apply(&self.projects) }
}

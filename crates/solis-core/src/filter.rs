//! Local filtering of the project portfolio.
//!
//! The server returns every project; category and free-text filtering happen
//! on the client after the fetch.

use crate::content::Project;

/// Label of the "no category filter" choice.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
  #[default]
  All,
  /// Exact, case-sensitive match on [`Project::category`].
  Only(String),
}

impl CategoryFilter {
  /// Parse a selector label; `"all"` clears the filter.
  pub fn from_label(label: &str) -> Self {
    if label == ALL_CATEGORIES {
      Self::All
    } else {
      Self::Only(label.to_string())
    }
  }

  pub fn label(&self) -> &str {
    match self {
      Self::All => ALL_CATEGORIES,
      Self::Only(c) => c,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
  pub category: CategoryFilter,
  /// Case-insensitive substring over title, description and technologies.
  /// Empty matches everything.
  pub search:   String,
}

impl ProjectFilter {
  pub fn matches(&self, project: &Project) -> bool {
    if let CategoryFilter::Only(category) = &self.category
      && project.category != *category
    {
      return false;
    }
    if self.search.is_empty() {
      return true;
    }
    let needle = self.search.to_lowercase();
    project.title.to_lowercase().contains(&needle)
      || project.description.to_lowercase().contains(&needle)
      || project
        .technologies
        .iter()
        .any(|t| t.to_lowercase().contains(&needle))
  }

  /// Projects passing the filter, in their original order.
  pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
    projects.iter().filter(|p| self.matches(p)).collect()
  }
}

/// Selector choices: `"all"` followed by each distinct category in
/// first-seen order.
pub fn category_choices(projects: &[Project]) -> Vec<String> {
  let mut choices = vec![ALL_CATEGORIES.to_string()];
  for project in projects {
    if !choices.contains(&project.category) {
      choices.push(project.category.clone());
    }
  }
  choices
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  fn project(title: &str, description: &str, category: &str, tech: &[&str]) -> Project {
    Project {
      id:              Uuid::new_v4(),
      title:           title.into(),
      description:     description.into(),
      category:        category.into(),
      technologies:    tech.iter().map(|t| t.to_string()).collect(),
      client:          None,
      image:           None,
      completion_date: None,
      featured:        false,
    }
  }

  fn portfolio() -> Vec<Project> {
    vec![
      project("Storefront", "Shop built with React", "web", &["Node"]),
      project("Dashboard", "Metrics UI", "web", &["ReactJS", "D3"]),
      project("Payroll", "Batch jobs", "enterprise", &["Java"]),
      project("Reactor Sim", "Physics", "Web", &["C++"]),
      project("Mobile Banking", "App", "mobile", &["Kotlin"]),
    ]
  }

  #[test]
  fn category_is_exact_match() {
    let projects = portfolio();
    let filter = ProjectFilter {
      category: CategoryFilter::Only("web".into()),
      search:   String::new(),
    };
    let titles: Vec<_> =
      filter.apply(&projects).iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Storefront", "Dashboard"]);
  }

  #[test]
  fn search_is_case_insensitive_across_fields() {
    let projects = portfolio();
    let filter = ProjectFilter {
      category: CategoryFilter::All,
      search:   "react".into(),
    };
    let titles: Vec<_> =
      filter.apply(&projects).iter().map(|p| p.title.as_str()).collect();
    // description, technology, and title matches respectively
    assert_eq!(titles, vec!["Storefront", "Dashboard", "Reactor Sim"]);
  }

  #[test]
  fn category_and_search_combine() {
    let projects = portfolio();
    let filter = ProjectFilter {
      category: CategoryFilter::Only("web".into()),
      search:   "REACT".into(),
    };
    assert_eq!(filter.apply(&projects).len(), 2);
  }

  #[test]
  fn default_filter_passes_everything() {
    let projects = portfolio();
    assert_eq!(ProjectFilter::default().apply(&projects).len(), projects.len());
  }

  #[test]
  fn choices_are_distinct_in_first_seen_order() {
    assert_eq!(category_choices(&portfolio()), vec![
      "all", "web", "enterprise", "Web", "mobile"
    ]);
  }

  #[test]
  fn all_label_round_trips() {
    assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_label("web").label(), "web");
  }
}

//! Layered settings: built-in defaults, then an optional TOML file, then
//! `SOLIS_*` environment variables.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use serde::Deserialize;
use solis_client::ApiConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SESSION_PATH: &str = "~/.config/solis/admin.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
  /// Server origin; every endpoint lives under `{base_url}/api`.
  pub base_url:     String,
  pub timeout_secs: u64,
  /// Where the admin record is kept. A leading `~/` is expanded.
  pub session_path: PathBuf,
}

impl SiteConfig {
  /// Read `file` if it exists, then the environment.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    Self::load_with(file, config::Environment::with_prefix("SOLIS"))
  }

  fn load_with(
    file: &Path,
    env: config::Environment,
  ) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("base_url", DEFAULT_BASE_URL)?
      .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
      .set_default("session_path", DEFAULT_SESSION_PATH)?
      .add_source(config::File::from(file).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  /// Apply a `--url` flag; it beats the file and the environment.
  pub fn override_base_url(&mut self, url: Option<String>) {
    if let Some(url) = url {
      self.base_url = url;
    }
  }

  pub fn api_config(&self) -> ApiConfig {
    ApiConfig {
      base_url: self.base_url.clone(),
      timeout:  Duration::from_secs(self.timeout_secs),
    }
  }

  pub fn session_path(&self) -> PathBuf { expand_tilde(&self.session_path) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("solis.toml");
    std::fs::write(
      &path,
      "base_url = \"https://solis.example\"\ntimeout_secs = 5\nsession_path = \
       \"/tmp/solis-admin.json\"\n",
    )
    .unwrap();
    path
  }

  fn env(vars: &[(&str, &str)]) -> config::Environment {
    let vars: config::Map<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    config::Environment::with_prefix("SOLIS").source(Some(vars))
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = SiteConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.api_config().timeout, Duration::from_secs(30));
  }

  #[test]
  fn file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = SiteConfig::load_with(&write_file(&dir), env(&[])).unwrap();
    assert_eq!(cfg.base_url, "https://solis.example");
    assert_eq!(cfg.timeout_secs, 5);
    assert_eq!(cfg.session_path(), PathBuf::from("/tmp/solis-admin.json"));
  }

  #[test]
  fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = SiteConfig::load_with(
      &write_file(&dir),
      env(&[
        ("SOLIS_BASE_URL", "https://env.example"),
        ("SOLIS_SESSION_PATH", "/var/lib/solis/admin.json"),
      ]),
    )
    .unwrap();
    assert_eq!(cfg.base_url, "https://env.example");
    assert_eq!(cfg.session_path(), PathBuf::from("/var/lib/solis/admin.json"));
    assert_eq!(cfg.timeout_secs, 5);
  }

  #[test]
  fn url_flag_beats_environment() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = SiteConfig::load_with(
      &write_file(&dir),
      env(&[("SOLIS_BASE_URL", "https://env.example")]),
    )
    .unwrap();

    cfg.override_base_url(None);
    assert_eq!(cfg.base_url, "https://env.example");
    cfg.override_base_url(Some("http://127.0.0.1:8000".into()));
    assert_eq!(cfg.api_config().base_url, "http://127.0.0.1:8000");
  }

  #[test]
  fn only_a_leading_tilde_is_expanded() {
    assert_eq!(
      expand_tilde(Path::new("/srv/~/admin.json")),
      PathBuf::from("/srv/~/admin.json")
    );
  }
}

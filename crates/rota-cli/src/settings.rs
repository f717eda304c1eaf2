//! Runtime configuration, read from `rota.toml` and `ROTA_*` environment
//! variables.
//!
//! ```toml
//! team = ["Abir", "Zoe", "Angus"]
//! store_path = "~/.local/share/rota/rota.db"
//! webhook_url = "https://hooks.slack.com/services/..."
//!
//! [devices]
//! a = "iPhone"
//! b = "Android"
//!
//! [[holidays]]
//! person = "Abir"
//! dates = ["2026-02-13", "2026-04-02"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use rota_core::{calendar::UnavailabilityCalendar, person::Roster};
use rota_notify::DeviceLabels;
use serde::Deserialize;

/// One person's unavailable dates.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
  pub person: String,
  #[serde(default)]
  pub dates:  Vec<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RotaConfig {
  /// Team members, in tie-break order.
  pub team:        Roster,
  #[serde(default)]
  pub holidays:    Vec<HolidayEntry>,
  #[serde(default = "default_store_path")]
  pub store_path:  PathBuf,
  /// Required unless running with `--dry-run`.
  #[serde(default)]
  pub webhook_url: Option<String>,
  #[serde(default)]
  pub devices:     DeviceLabels,
  #[serde(default = "default_title")]
  pub title:       String,
}

fn default_store_path() -> PathBuf { PathBuf::from("rota.db") }

fn default_title() -> String { "Device Rota".to_owned() }

impl RotaConfig {
  /// Layer the optional file at `path` under `ROTA_*` environment variables.
  pub fn load(path: &Path) -> Result<Self> {
    Self::load_with_env(path, config::Environment::with_prefix("ROTA"))
  }

  fn load_with_env(path: &Path, env: config::Environment) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise RotaConfig")
  }

  /// Build the calendar, rejecting entries for people not on the team.
  pub fn calendar(&self) -> Result<UnavailabilityCalendar> {
    let calendar = self
      .holidays
      .iter()
      .fold(UnavailabilityCalendar::new(), |cal, entry| {
        cal.with_dates(entry.person.as_str(), entry.dates.iter().copied())
      });
    calendar
      .check_against(&self.team)
      .context("invalid holidays")?;
    Ok(calendar)
  }

  /// `store_path` with a leading `~` expanded.
  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
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
  use std::io::Write as _;

  use rota_core::person::Person;

  use super::*;

  fn load(toml: &str) -> Result<RotaConfig> {
    load_with_vars(toml, &[])
  }

  /// Load `toml` with `vars` standing in for the process environment.
  fn load_with_vars(toml: &str, vars: &[(&str, &str)]) -> Result<RotaConfig> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(toml.as_bytes())?;
    let env = config::Environment::with_prefix("ROTA").source(Some(
      vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect(),
    ));
    RotaConfig::load_with_env(file.path(), env)
  }

  #[test]
  fn loads_full_config() {
    let cfg = load(
      r#"
      team = ["Abir", "Zoe", "Tom"]
      store_path = "/tmp/rota.db"
      webhook_url = "https://example.invalid/hook"
      title = "MFA Phone Rota"

      [devices]
      a = "iPhone"
      b = "Android"

      [[holidays]]
      person = "Zoe"
      dates = ["2026-02-09", "2026-02-10"]
      "#,
    )
    .unwrap();

    assert_eq!(cfg.team.members().len(), 3);
    assert_eq!(cfg.devices.a, "iPhone");
    assert_eq!(cfg.title, "MFA Phone Rota");
    assert_eq!(cfg.store_path(), PathBuf::from("/tmp/rota.db"));

    let cal = cfg.calendar().unwrap();
    assert!(cal.is_unavailable(&Person::from("Zoe"), "2026-02-10".parse().unwrap()));
  }

  #[test]
  fn webhook_url_comes_from_environment() {
    let cfg = load_with_vars(
      r#"
      team = ["A", "B"]
      webhook_url = "https://example.invalid/from-file"
      "#,
      &[("ROTA_WEBHOOK_URL", "https://example.invalid/from-env")],
    )
    .unwrap();
    assert_eq!(
      cfg.webhook_url.as_deref(),
      Some("https://example.invalid/from-env")
    );

    let cfg = load_with_vars(
      r#"team = ["A", "B"]"#,
      &[("ROTA_WEBHOOK_URL", "https://example.invalid/only-env")],
    )
    .unwrap();
    assert_eq!(
      cfg.webhook_url.as_deref(),
      Some("https://example.invalid/only-env")
    );
  }

  #[test]
  fn defaults_apply() {
    let cfg = load(r#"team = ["A", "B"]"#).unwrap();
    assert!(cfg.holidays.is_empty());
    assert_eq!(cfg.devices, DeviceLabels::default());
    assert_eq!(cfg.title, "Device Rota");
  }

  #[test]
  fn holidays_for_strangers_are_rejected() {
    let cfg = load(
      r#"
      team = ["A", "B"]
      [[holidays]]
      person = "Q"
      dates = ["2026-02-09"]
      "#,
    )
    .unwrap();
    assert!(cfg.calendar().is_err());
  }

  #[test]
  fn duplicate_team_members_are_rejected() {
    assert!(load(r#"team = ["A", "A"]"#).is_err());
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/rota.db")),
      PathBuf::from(home).join("rota.db")
    );
    assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
  }
}

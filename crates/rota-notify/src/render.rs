//! Plain-text (Slack mrkdwn) rendering of a [`RotaResult`].

use chrono::NaiveDate;
use rota_core::{
  Period, RotaResult,
  builder::{RotaAssignment, RotaFailure},
  calendar::UnavailabilityCalendar,
  person::{Person, Roster},
};
use serde::Deserialize;

/// Display names for the two devices, e.g. "iPhone" and "Android".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceLabels {
  pub a: String,
  pub b: String,
}

impl Default for DeviceLabels {
  fn default() -> Self {
    Self {
      a: "Device A".to_owned(),
      b: "Device B".to_owned(),
    }
  }
}

/// Renders results against the roster and calendar they were built from, so
/// that absence notes can be included.
pub struct Renderer<'a> {
  pub title:    &'a str,
  pub labels:   &'a DeviceLabels,
  pub roster:   &'a Roster,
  pub calendar: &'a UnavailabilityCalendar,
}

impl Renderer<'_> {
  pub fn render(&self, result: &RotaResult) -> String {
    match result {
      RotaResult::Failure(f) => self.render_failure(f),
      RotaResult::Success(s) => self.render_assignment(s),
    }
  }

  fn render_failure(&self, failure: &RotaFailure) -> String {
    let available = if failure.available.is_empty() {
      "None".to_owned()
    } else {
      join_names(&failure.available)
    };

    [
      format!("*📱 {} - {}*", self.title, failure.period.start_label()),
      String::new(),
      format!("⚠️ {}", failure.message),
      String::new(),
      format!("Available: {available}"),
    ]
    .join("\n")
  }

  fn render_assignment(&self, a: &RotaAssignment) -> String {
    let Period { start, end } = a.period;
    let or_na = |p: Option<&Person>| p.map_or("N/A".to_owned(), Person::to_string);

    let mut lines = vec![
      format!("*📱 {}: {} {}*", self.title, weekday(start), a.period.start_label()),
      String::new(),
      format!(
        "_Take home {} evening, return {} {}_",
        weekday(start.pred_opt().unwrap_or(start)),
        weekday(end),
        a.period.end_label(),
      ),
      String::new(),
      "*Primary (taking devices home):*".to_owned(),
      format!("📱 {}: *{}*", self.labels.a, a.primary.device_a),
      format!("📱 {}: *{}*", self.labels.b, a.primary.device_b),
      String::new(),
      "*Backups (cover if a primary is ill):*".to_owned(),
      format!("🛡️ {} backup: {}", self.labels.a, or_na(a.backups.device_a())),
      format!("🛡️ {} backup: {}", self.labels.b, or_na(a.backups.device_b())),
    ];

    if let Some(person) = a.backups.device_a().filter(|_| a.backups.is_degraded()) {
      lines.push(String::new());
      lines.push(format!(
        "_⚠️ {person} is backup for both devices (limited availability)_"
      ));
    }

    let notes = self.absence_notes(a.period);
    if !notes.is_empty() {
      lines.push(String::new());
      lines.push(format!("_🏖️ {}_", notes.join(" | ")));
    }

    lines.join("\n")
  }

  /// "X off Fri" / "Y off Mon" for roster members away on a boundary date.
  fn absence_notes(&self, period: Period) -> Vec<String> {
    [period.start, period.end]
      .into_iter()
      .flat_map(|date| {
        self
          .calendar
          .absent_on(self.roster, date)
          .into_iter()
          .map(move |person| format!("{person} off {}", date.format("%a")))
      })
      .collect()
  }
}

fn weekday(date: NaiveDate) -> String { date.format("%A").to_string() }

fn join_names(people: &[Person]) -> String {
  people.iter().map(Person::name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
  use rota_core::{RotaBuilder, ledger::HistoryLedger};

  use super::*;

  fn date(s: &str) -> NaiveDate { s.parse().unwrap() }

  fn labels() -> DeviceLabels {
    DeviceLabels { a: "iPhone".into(), b: "Android".into() }
  }

  fn run(names: &[&str], calendar: UnavailabilityCalendar) -> String {
    let roster = Roster::new(names.iter().copied()).unwrap();
    let mut builder =
      RotaBuilder::new(roster.clone(), calendar.clone(), HistoryLedger::new());
    let result =
      builder.build(Period::new(date("2026-06-05"), date("2026-06-08")).unwrap());

    let labels = labels();
    Renderer {
      title:    "Phone Rota",
      labels:   &labels,
      roster:   &roster,
      calendar: &calendar,
    }
    .render(&result)
  }

  #[test]
  fn renders_full_assignment() {
    let text = run(&["A", "B", "C", "D"], UnavailabilityCalendar::new());
    assert!(text.starts_with("*📱 Phone Rota: Friday 5 Jun*"));
    assert!(text.contains("_Take home Thursday evening, return Monday 8 Jun_"));
    assert!(text.contains("📱 iPhone: *A*"));
    assert!(text.contains("📱 Android: *B*"));
    assert!(text.contains("🛡️ iPhone backup: C"));
    assert!(text.contains("🛡️ Android backup: D"));
    assert!(!text.contains("limited availability"));
    assert!(!text.contains("🏖️"));
  }

  #[test]
  fn flags_single_backup() {
    let text = run(&["A", "B", "C"], UnavailabilityCalendar::new());
    assert!(text.contains("🛡️ iPhone backup: C"));
    assert!(text.contains("🛡️ Android backup: C"));
    assert!(text.contains("C is backup for both devices"));
  }

  #[test]
  fn missing_backups_show_na() {
    let text = run(&["A", "B"], UnavailabilityCalendar::new());
    assert!(text.contains("🛡️ iPhone backup: N/A"));
    assert!(text.contains("🛡️ Android backup: N/A"));
  }

  #[test]
  fn lists_absences_on_boundaries() {
    let calendar = UnavailabilityCalendar::new()
      .with_dates("D", [date("2026-06-08")])
      .with_dates("A", [date("2026-06-05"), date("2026-06-06")]);
    let text = run(&["A", "B", "C", "D", "E"], calendar);
    assert!(text.ends_with("_🏖️ A off Fri | D off Mon_"));
  }

  #[test]
  fn absences_list_start_date_before_end_date() {
    let calendar = UnavailabilityCalendar::new()
      .with_dates("A", [date("2026-06-08")])
      .with_dates("E", [date("2026-06-05"), date("2026-06-08")]);
    let text = run(&["A", "B", "C", "D", "E"], calendar);
    assert!(text.ends_with("_🏖️ E off Fri | A off Mon | E off Mon_"));
  }

  #[test]
  fn renders_failure() {
    let day = date("2026-06-05");
    let calendar = UnavailabilityCalendar::new()
      .with_dates("A", [day])
      .with_dates("B", [day])
      .with_dates("C", [day]);
    let text = run(&["A", "B", "C"], calendar);
    assert!(text.starts_with("*📱 Phone Rota - 5 Jun*"));
    assert!(text.contains("Not enough people available"));
    assert!(text.ends_with("Available: None"));
  }

  #[test]
  fn failure_lists_the_lone_available_person() {
    let day = date("2026-06-08");
    let calendar = UnavailabilityCalendar::new().with_dates("A", [day]);
    let text = run(&["A", "B"], calendar);
    assert!(text.ends_with("Available: B"));
  }
}

//! Unavailability calendar and the availability filter built on it.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  person::{Person, Roster},
};

/// Dates on which each person cannot hold a device. Static configuration;
/// nothing in this crate mutates it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnavailabilityCalendar {
  entries: HashMap<Person, BTreeSet<NaiveDate>>,
}

impl UnavailabilityCalendar {
  pub fn new() -> Self { Self::default() }

  /// Mark `person` as away on every date in `dates`.
  pub fn with_dates<I>(mut self, person: impl Into<Person>, dates: I) -> Self
  where
    I: IntoIterator<Item = NaiveDate>,
  {
    self.entries.entry(person.into()).or_default().extend(dates);
    self
  }

  /// Total lookup: unknown people and unlisted dates are available.
  pub fn is_unavailable(&self, person: &Person, date: NaiveDate) -> bool {
    self
      .entries
      .get(person)
      .is_some_and(|dates| dates.contains(&date))
  }

  /// Roster members away on `date`, in roster order.
  pub fn absent_on<'r>(
    &self,
    roster: &'r Roster,
    date: NaiveDate,
  ) -> Vec<&'r Person> {
    roster
      .iter()
      .filter(|p| self.is_unavailable(p, date))
      .collect()
  }

  /// Reject entries for people who are not on the roster; these are almost
  /// always typos in the configuration.
  pub fn check_against(&self, roster: &Roster) -> Result<()> {
    let mut unknown: Vec<&Person> =
      self.entries.keys().filter(|p| !roster.contains(p)).collect();
    unknown.sort();
    match unknown.first() {
      Some(p) => Err(Error::UnknownPerson(p.name().to_owned())),
      None => Ok(()),
    }
  }
}

/// People free on both `start` and `end`, in roster order.
///
/// Devices change hands at both ends of a period, so being away on either
/// boundary date rules a person out.
pub fn available(
  roster: &Roster,
  calendar: &UnavailabilityCalendar,
  start: NaiveDate,
  end: NaiveDate,
) -> Vec<Person> {
  roster
    .iter()
    .filter(|p| {
      !calendar.is_unavailable(p, start) && !calendar.is_unavailable(p, end)
    })
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(s: &str) -> NaiveDate { s.parse().unwrap() }

  fn roster() -> Roster { Roster::new(["A", "B", "C", "D"]).unwrap() }

  #[test]
  fn unknown_person_is_available() {
    let cal = UnavailabilityCalendar::new();
    assert!(!cal.is_unavailable(&Person::from("Nobody"), date("2026-06-05")));
  }

  #[test]
  fn away_on_either_boundary_is_excluded() {
    let cal = UnavailabilityCalendar::new()
      .with_dates("A", [date("2026-06-05")])
      .with_dates("C", [date("2026-06-08")])
      .with_dates("D", [date("2026-06-06")]);

    let free = available(&roster(), &cal, date("2026-06-05"), date("2026-06-08"));
    assert_eq!(free, vec![Person::from("B"), Person::from("D")]);
  }

  #[test]
  fn nobody_free_returns_empty() {
    let day = date("2026-06-05");
    let cal = ["A", "B", "C", "D"]
      .into_iter()
      .fold(UnavailabilityCalendar::new(), |cal, p| cal.with_dates(p, [day]));

    assert!(available(&roster(), &cal, day, date("2026-06-08")).is_empty());
  }

  #[test]
  fn absent_on_follows_roster_order() {
    let day = date("2026-06-08");
    let cal = UnavailabilityCalendar::new()
      .with_dates("D", [day])
      .with_dates("B", [day]);

    let r = roster();
    let names: Vec<_> = cal.absent_on(&r, day).into_iter().map(Person::name).collect();
    assert_eq!(names, ["B", "D"]);
  }

  #[test]
  fn check_against_flags_strangers() {
    let cal = UnavailabilityCalendar::new().with_dates("Zed", [date("2026-01-01")]);
    assert!(matches!(
      cal.check_against(&roster()),
      Err(Error::UnknownPerson(name)) if name == "Zed"
    ));
    assert!(UnavailabilityCalendar::new().check_against(&roster()).is_ok());
  }

  #[test]
  fn deserialises_from_iso_dates() {
    let cal: UnavailabilityCalendar =
      serde_json::from_str(r#"{"A": ["2026-02-13", "2026-04-02"], "B": []}"#).unwrap();
    assert!(cal.is_unavailable(&Person::from("A"), date("2026-04-02")));
    assert!(!cal.is_unavailable(&Person::from("B"), date("2026-04-02")));
  }
}

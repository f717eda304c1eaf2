//! People and the ordered roster they are drawn from.
//!
//! Roster order is significant: it is the final tie-break in every ranking
//! the selector performs.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A team member, identified by display name.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
  pub fn new(name: impl Into<String>) -> Self { Self(name.into()) }

  pub fn name(&self) -> &str { &self.0 }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Person {
  fn from(name: &str) -> Self { Self::new(name) }
}

impl From<String> for Person {
  fn from(name: String) -> Self { Self(name) }
}

// ─── Roster ──────────────────────────────────────────────────────────────────

/// The fixed, ordered team. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
  members: Vec<Person>,
}

impl Roster {
  /// Build a roster, rejecting blank names, duplicates, and teams too small
  /// to ever fill both devices.
  pub fn new<I, P>(members: I) -> Result<Self>
  where
    I: IntoIterator<Item = P>,
    P: Into<Person>,
  {
    let members: Vec<Person> = members.into_iter().map(Into::into).collect();

    let mut seen = HashSet::with_capacity(members.len());
    for person in &members {
      if person.name().trim().is_empty() {
        return Err(Error::BlankName);
      }
      if !seen.insert(person) {
        return Err(Error::DuplicateMember(person.name().to_owned()));
      }
    }

    if members.len() < 2 {
      return Err(Error::RosterTooSmall(members.len()));
    }

    Ok(Self { members })
  }

  pub fn members(&self) -> &[Person] { &self.members }

  pub fn contains(&self, person: &Person) -> bool {
    self.members.contains(person)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Person> { self.members.iter() }
}

impl<'a> IntoIterator for &'a Roster {
  type IntoIter = std::slice::Iter<'a, Person>;
  type Item = &'a Person;

  fn into_iter(self) -> Self::IntoIter { self.members.iter() }
}

impl<'de> Deserialize<'de> for Roster {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let names = Vec::<String>::deserialize(deserializer)?;
    Roster::new(names).map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn roster_preserves_order() {
    let roster = Roster::new(["Zoe", "Abir", "Tom"]).unwrap();
    let names: Vec<_> = roster.iter().map(Person::name).collect();
    assert_eq!(names, ["Zoe", "Abir", "Tom"]);
  }

  #[test]
  fn roster_rejects_duplicates() {
    let err = Roster::new(["Zoe", "Tom", "Zoe"]).unwrap_err();
    assert!(matches!(err, Error::DuplicateMember(name) if name == "Zoe"));
  }

  #[test]
  fn roster_rejects_blank_names() {
    assert!(matches!(Roster::new(["Zoe", "  "]), Err(Error::BlankName)));
  }

  #[test]
  fn roster_needs_two_members() {
    assert!(matches!(Roster::new(["Zoe"]), Err(Error::RosterTooSmall(1))));
  }

  #[test]
  fn roster_deserialises_with_validation() {
    let roster: Roster = serde_json::from_str(r#"["A", "B"]"#).unwrap();
    assert_eq!(roster.members().len(), 2);

    let bad = serde_json::from_str::<Roster>(r#"["A", "A"]"#);
    assert!(bad.is_err());
  }
}

//! The history ledger: an append-only, ordered record of past assignments.
//!
//! Every record carries equal weight for load counting; position only matters
//! for the recency tie-break. Records are never edited or evicted.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::person::Person;

// ─── Records ─────────────────────────────────────────────────────────────────

/// One completed assignment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
  pub device_a: Person,
  pub device_b: Person,
  /// First day of the holding period.
  pub date:     NaiveDate,
}

// ─── Counts ──────────────────────────────────────────────────────────────────

/// How often one person has held each device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldCounts {
  pub device_a: u32,
  pub device_b: u32,
}

impl HoldCounts {
  /// Holds of either device. Always `device_a + device_b`.
  pub fn total(&self) -> u32 { self.device_a + self.device_b }

  /// Device-A holds minus device-B holds.
  pub fn skew(&self) -> i64 { i64::from(self.device_a) - i64::from(self.device_b) }
}

#[derive(Clone, Copy)]
enum Device {
  A,
  B,
}

/// Per-person [`HoldCounts`], derived from a full ledger scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentCounts {
  by_person: HashMap<Person, HoldCounts>,
}

impl AssignmentCounts {
  /// Counts for `person`; all zero if they have never held a device.
  pub fn get(&self, person: &Person) -> HoldCounts {
    self.by_person.get(person).copied().unwrap_or_default()
  }

  pub fn total(&self, person: &Person) -> u32 { self.get(person).total() }

  fn record(&mut self, person: &Person, device: Device) {
    let counts = self.by_person.entry(person.clone()).or_default();
    match device {
      Device::A => counts.device_a += 1,
      Device::B => counts.device_b += 1,
    }
  }
}

// ─── Recency ─────────────────────────────────────────────────────────────────

/// How long ago a person last held either device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastHeld {
  Never,
  /// Distance from the most recent record; `0` means the latest one.
  RecordsAgo(usize),
}

impl LastHeld {
  /// Ordering key where smaller means more overdue: `Never` first, then the
  /// longest gap.
  pub fn overdue_rank(self) -> (bool, std::cmp::Reverse<usize>) {
    match self {
      Self::Never => (false, std::cmp::Reverse(usize::MAX)),
      Self::RecordsAgo(d) => (true, std::cmp::Reverse(d)),
    }
  }
}

// ─── Ledger trait ────────────────────────────────────────────────────────────

/// Read/append access to an ordered history of assignments.
///
/// The selector only ever needs these three operations, so anything that can
/// provide them with the same ordering guarantees can back a
/// [`RotaBuilder`](crate::builder::RotaBuilder).
pub trait Ledger {
  /// Add `record` after all existing records. Duplicate dates are allowed.
  fn append(&mut self, record: AssignmentRecord);

  /// Per-person counts over the whole history.
  fn counts_by_person(&self) -> AssignmentCounts;

  /// Recency of `person`'s last hold.
  fn last_held(&self, person: &Person) -> LastHeld;
}

// ─── In-memory ledger ────────────────────────────────────────────────────────

/// A [`Ledger`] held entirely in memory.
///
/// Keeps a person → last-position index alongside the records so recency
/// lookups do not rescan the history.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
  records:   Vec<AssignmentRecord>,
  last_seen: HashMap<Person, usize>,
}

impl HistoryLedger {
  pub fn new() -> Self { Self::default() }

  /// Rebuild a ledger from records in insertion order (oldest first).
  pub fn from_records(records: impl IntoIterator<Item = AssignmentRecord>) -> Self {
    let mut ledger = Self::new();
    for record in records {
      ledger.append(record);
    }
    ledger
  }

  pub fn records(&self) -> &[AssignmentRecord] { &self.records }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl Ledger for HistoryLedger {
  fn append(&mut self, record: AssignmentRecord) {
    let position = self.records.len();
    self.last_seen.insert(record.device_a.clone(), position);
    self.last_seen.insert(record.device_b.clone(), position);
    self.records.push(record);
  }

  fn counts_by_person(&self) -> AssignmentCounts {
    let mut counts = AssignmentCounts::default();
    for record in &self.records {
      counts.record(&record.device_a, Device::A);
      counts.record(&record.device_b, Device::B);
    }
    counts
  }

  fn last_held(&self, person: &Person) -> LastHeld {
    match self.last_seen.get(person) {
      Some(&position) => LastHeld::RecordsAgo(self.records.len() - 1 - position),
      None => LastHeld::Never,
    }
  }
}

impl<L: Ledger + ?Sized> Ledger for &mut L {
  fn append(&mut self, record: AssignmentRecord) { (**self).append(record) }

  fn counts_by_person(&self) -> AssignmentCounts { (**self).counts_by_person() }

  fn last_held(&self, person: &Person) -> LastHeld { (**self).last_held(person) }
}

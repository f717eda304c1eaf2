//! The rota builder: one run of availability, selection and ledger append for
//! a caller-supplied period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  calendar::{UnavailabilityCalendar, available},
  ledger::{AssignmentRecord, Ledger},
  person::{Person, Roster},
  selector::{Backups, PrimaryAssignment, select_backups, select_primary},
};

/// Shown to readers when no assignment could be made.
pub const INSUFFICIENT_AVAILABILITY_ADVISORY: &str =
  "Not enough people available for both the start and end of the period";

// ─── Period ──────────────────────────────────────────────────────────────────

/// The holding period. Devices are handed over on `start` and returned on
/// `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
  pub start: NaiveDate,
  pub end:   NaiveDate,
}

impl Period {
  pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
    if end < start {
      return Err(Error::InvertedPeriod { start, end });
    }
    Ok(Self { start, end })
  }

  /// Short label for the first day, e.g. `5 Jun`.
  pub fn start_label(&self) -> String { short_label(self.start) }

  /// Short label for the last day, e.g. `8 Jun`.
  pub fn end_label(&self) -> String { short_label(self.end) }
}

fn short_label(date: NaiveDate) -> String { date.format("%-d %b").to_string() }

// ─── Results ─────────────────────────────────────────────────────────────────

/// Why no assignment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
  InsufficientAvailability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaFailure {
  pub period:    Period,
  pub reason:    FailureReason,
  pub message:   String,
  /// Everyone who was free, possibly nobody.
  pub available: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaAssignment {
  pub period:    Period,
  pub primary:   PrimaryAssignment,
  pub backups:   Backups,
  pub available: Vec<Person>,
}

impl RotaAssignment {
  /// The ledger entry this assignment produced.
  pub fn record(&self) -> AssignmentRecord {
    AssignmentRecord {
      device_a: self.primary.device_a.clone(),
      device_b: self.primary.device_b.clone(),
      date:     self.period.start,
    }
  }
}

/// Outcome of one [`RotaBuilder::build`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RotaResult {
  Failure(RotaFailure),
  Success(RotaAssignment),
}

impl RotaResult {
  pub fn available(&self) -> &[Person] {
    match self {
      Self::Failure(f) => &f.available,
      Self::Success(s) => &s.available,
    }
  }

  pub fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

  pub fn assignment(&self) -> Option<&RotaAssignment> {
    match self {
      Self::Success(s) => Some(s),
      Self::Failure(_) => None,
    }
  }
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// Owns the configuration and the ledger for a run.
///
/// [`build`](Self::build) is the only operation that changes state, and only
/// on success. Callers running it from several places must serialise calls
/// themselves.
#[derive(Debug)]
pub struct RotaBuilder<L> {
  roster:   Roster,
  calendar: UnavailabilityCalendar,
  ledger:   L,
}

impl<L: Ledger> RotaBuilder<L> {
  pub fn new(roster: Roster, calendar: UnavailabilityCalendar, ledger: L) -> Self {
    Self { roster, calendar, ledger }
  }

  pub fn roster(&self) -> &Roster { &self.roster }

  pub fn calendar(&self) -> &UnavailabilityCalendar { &self.calendar }

  pub fn ledger(&self) -> &L { &self.ledger }

  /// Assign devices for `period`, appending exactly one ledger record on
  /// success and nothing on failure.
  pub fn build(&mut self, period: Period) -> RotaResult {
    let available =
      available(&self.roster, &self.calendar, period.start, period.end);

    let counts = self.ledger.counts_by_person();
    let Some(primary) = select_primary(&available, &counts, &self.ledger) else {
      tracing::warn!(
        start = %period.start,
        end = %period.end,
        available = available.len(),
        "insufficient availability; no assignment made"
      );
      return RotaResult::Failure(RotaFailure {
        period,
        reason: FailureReason::InsufficientAvailability,
        message: INSUFFICIENT_AVAILABILITY_ADVISORY.to_owned(),
        available,
      });
    };

    let backups = select_backups(&available, &primary, &counts);

    let assignment = RotaAssignment { period, primary, backups, available };
    self.ledger.append(assignment.record());

    tracing::info!(
      start = %period.start,
      device_a = %assignment.primary.device_a,
      device_b = %assignment.primary.device_b,
      "recorded assignment"
    );

    RotaResult::Success(assignment)
  }
}

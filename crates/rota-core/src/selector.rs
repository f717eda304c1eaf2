//! Fair selection of primary and backup holders.
//!
//! Primary holders are ranked by total load, then by how long they have gone
//! without a device, then by roster order. Device A goes to whichever of the
//! pair has the lower A-minus-B skew. Backups are ranked by load alone.
//!
//! All sorts are stable so callers must pass candidates in roster order.

use serde::{Deserialize, Serialize};

use crate::{
  ledger::{AssignmentCounts, Ledger},
  person::Person,
};

// ─── Assignments ─────────────────────────────────────────────────────────────

/// The two people taking devices home for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAssignment {
  pub device_a: Person,
  pub device_b: Person,
}

impl PrimaryAssignment {
  pub fn contains(&self, person: &Person) -> bool {
    self.device_a == *person || self.device_b == *person
  }
}

/// Fallback holders if a primary drops out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "coverage", rename_all = "snake_case")]
pub enum Backups {
  /// Nobody left after the primaries were chosen.
  None,
  /// Exactly one candidate, who covers both devices. Degraded coverage.
  Single { person: Person },
  /// One distinct backup per device.
  Pair { device_a: Person, device_b: Person },
}

impl Backups {
  pub fn device_a(&self) -> Option<&Person> {
    match self {
      Self::None => None,
      Self::Single { person } => Some(person),
      Self::Pair { device_a, .. } => Some(device_a),
    }
  }

  pub fn device_b(&self) -> Option<&Person> {
    match self {
      Self::None => None,
      Self::Single { person } => Some(person),
      Self::Pair { device_b, .. } => Some(device_b),
    }
  }

  /// One person is backing up both devices.
  pub fn is_degraded(&self) -> bool { matches!(self, Self::Single { .. }) }

  pub fn is_empty(&self) -> bool { matches!(self, Self::None) }
}

// ─── Primary ─────────────────────────────────────────────────────────────────

/// Pick the two primary holders from `available`.
///
/// Returns `None` when fewer than two people are available.
pub fn select_primary<L>(
  available: &[Person],
  counts: &AssignmentCounts,
  ledger: &L,
) -> Option<PrimaryAssignment>
where
  L: Ledger + ?Sized,
{
  if available.len() < 2 {
    return None;
  }

  let mut ranked: Vec<&Person> = available.iter().collect();
  ranked.sort_by_cached_key(|p| {
    (counts.total(p), ledger.last_held(p).overdue_rank())
  });

  let (first, second) = (ranked[0], ranked[1]);

  // Equal skew keeps the better-ranked person on device A.
  let (device_a, device_b) =
    if counts.get(first).skew() <= counts.get(second).skew() {
      (first, second)
    } else {
      (second, first)
    };

  tracing::debug!(
    device_a = %device_a,
    device_b = %device_b,
    "selected primary holders"
  );

  Some(PrimaryAssignment {
    device_a: device_a.clone(),
    device_b: device_b.clone(),
  })
}

// ─── Backups ─────────────────────────────────────────────────────────────────

/// Pick backups from whoever in `available` is not already a primary.
pub fn select_backups(
  available: &[Person],
  primary: &PrimaryAssignment,
  counts: &AssignmentCounts,
) -> Backups {
  let mut pool: Vec<&Person> =
    available.iter().filter(|p| !primary.contains(p)).collect();
  pool.sort_by_key(|p| counts.total(p));

  match pool.as_slice() {
    [] => Backups::None,
    [only] => {
      tracing::warn!(person = %only, "single backup covering both devices");
      Backups::Single { person: (*only).clone() }
    }
    [first, second, ..] => Backups::Pair {
      device_a: (*first).clone(),
      device_b: (*second).clone(),
    },
  }
}

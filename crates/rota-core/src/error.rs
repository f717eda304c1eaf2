//! Error types for `rota-core`.
//!
//! Only configuration problems are errors. Scheduling outcomes such as
//! insufficient availability are reported as data in
//! [`RotaResult`](crate::builder::RotaResult).

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("roster needs at least 2 members, got {0}")]
  RosterTooSmall(usize),

  #[error("roster member name is blank")]
  BlankName,

  #[error("duplicate roster member: {0}")]
  DuplicateMember(String),

  #[error("calendar entry for {0:?} names someone outside the roster")]
  UnknownPerson(String),

  #[error("period ends ({end}) before it starts ({start})")]
  InvertedPeriod { start: NaiveDate, end: NaiveDate },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! The `LedgerStore` trait: durable storage for the assignment history.
//!
//! The selection engine itself works against the synchronous
//! [`Ledger`](crate::ledger::Ledger) trait. A store sits at the boundary: the
//! caller loads the history before a run and appends the new record after a
//! successful one.

use std::future::Future;

use crate::ledger::{AssignmentRecord, HistoryLedger};

/// Abstraction over a persistent, append-only assignment history.
///
/// Implementations must return records in the order they were appended.
pub trait LedgerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load every record, oldest first.
  fn load_history(
    &self,
  ) -> impl Future<Output = Result<HistoryLedger, Self::Error>> + Send + '_;

  /// Persist `record` after all existing records.
  fn append_record(
    &self,
    record: AssignmentRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

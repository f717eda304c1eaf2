//! [`SqliteLedgerStore`] — the SQLite implementation of [`LedgerStore`].

use std::path::Path;

use chrono::Utc;
use rota_core::{
  ledger::{AssignmentRecord, HistoryLedger},
  store::LedgerStore,
};

use crate::{
  Result,
  encode::{RawAssignment, encode_date, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An assignment history backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteLedgerStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteLedgerStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing and dry runs.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LedgerStore impl ────────────────────────────────────────────────────────

impl LedgerStore for SqliteLedgerStore {
  type Error = crate::Error;

  async fn load_history(&self) -> Result<HistoryLedger> {
    let raws: Vec<RawAssignment> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT seq, device_a, device_b, period_start
           FROM assignments
           ORDER BY seq ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawAssignment {
              seq:          row.get(0)?,
              device_a:     row.get(1)?,
              device_b:     row.get(2)?,
              period_start: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let records = raws
      .into_iter()
      .map(RawAssignment::into_record)
      .collect::<Result<Vec<_>>>()?;

    tracing::debug!(records = records.len(), "loaded assignment history");
    Ok(HistoryLedger::from_records(records))
  }

  async fn append_record(&self, record: AssignmentRecord) -> Result<()> {
    let device_a     = record.device_a.name().to_owned();
    let device_b     = record.device_b.name().to_owned();
    let period_start = encode_date(record.date);
    let recorded_at  = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO assignments (device_a, device_b, period_start, recorded_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![device_a, device_b, period_start, recorded_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Period dates are stored as `YYYY-MM-DD`; timestamps as RFC 3339.

use chrono::{DateTime, NaiveDate, Utc};
use rota_core::{ledger::AssignmentRecord, person::Person};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(date: NaiveDate) -> String { date.format(DATE_FORMAT).to_string() }

pub fn decode_date(row: i64, s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::DateParse {
    row,
    message: format!("{s:?}: {e}"),
  })
}

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `assignments` row.
pub struct RawAssignment {
  pub seq:          i64,
  pub device_a:     String,
  pub device_b:     String,
  pub period_start: String,
}

impl RawAssignment {
  pub fn into_record(self) -> Result<AssignmentRecord> {
    if self.device_a.trim().is_empty() || self.device_b.trim().is_empty() {
      return Err(Error::BlankHolder(self.seq));
    }
    Ok(AssignmentRecord {
      date:     decode_date(self.seq, &self.period_start)?,
      device_a: Person::new(self.device_a),
      device_b: Person::new(self.device_b),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_round_trip() {
    let date = NaiveDate::from_ymd_opt(2026, 6, 5).unwrap();
    assert_eq!(encode_date(date), "2026-06-05");
    assert_eq!(decode_date(1, "2026-06-05").unwrap(), date);
  }

  #[test]
  fn bad_date_reports_row() {
    let err = decode_date(7, "next friday").unwrap_err();
    assert!(matches!(err, Error::DateParse { row: 7, .. }));
  }

  #[test]
  fn blank_holder_rejected() {
    let raw = RawAssignment {
      seq:          3,
      device_a:     "A".into(),
      device_b:     " ".into(),
      period_start: "2026-06-05".into(),
    };
    assert!(matches!(raw.into_record(), Err(Error::BlankHolder(3))));
  }
}

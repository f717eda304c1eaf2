//! Error type for `rota-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error in row {row}: {message}")]
  DateParse { row: i64, message: String },

  #[error("row {0} has a blank holder name")]
  BlankHolder(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

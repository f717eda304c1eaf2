//! Error type for `rota-notify`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no webhook URL configured")]
  MissingEndpoint,

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("webhook rejected the message: {0}")]
  Rejected(reqwest::StatusCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Calendar arithmetic for picking the next holding period.
//!
//! The core never asks what day it is; this module turns "today" into the
//! explicit dates it needs.

use anyhow::{Result, bail};
use chrono::{Datelike, Days, NaiveDate};
use rota_core::Period;

/// Days from the handover Friday to the return Monday.
const PERIOD_LENGTH: Days = Days::new(3);

/// The Friday devices are next handed over, as seen from `today`.
///
/// Sunday to Wednesday look ahead to this week's Friday. Thursday onwards is
/// too late to organise, so they skip to the following week.
pub fn next_friday(today: NaiveDate) -> NaiveDate {
  let dow = u64::from(today.weekday().num_days_from_sunday());
  let days = if dow <= 3 { 5 - dow } else { 12 - dow };
  today + Days::new(days)
}

pub fn following_monday(friday: NaiveDate) -> NaiveDate { friday + PERIOD_LENGTH }

/// Work out the period from whichever dates the caller pinned down.
pub fn resolve(
  today: NaiveDate,
  start: Option<NaiveDate>,
  end: Option<NaiveDate>,
) -> Result<Period> {
  let (start, end) = match (start, end) {
    (Some(start), end) => (start, end.unwrap_or(start + PERIOD_LENGTH)),
    (None, None) => {
      let friday = next_friday(today);
      (friday, following_monday(friday))
    }
    (None, Some(_)) => bail!("--end requires --start"),
  };
  Ok(Period::new(start, end)?)
}

//! Core types and selection logic for the device rota.
//!
//! This crate is deliberately free of HTTP and database dependencies and of
//! any notion of "today". Callers hand it a roster, an unavailability
//! calendar, a ledger of past assignments and an explicit [`Period`]; it hands
//! back a [`RotaResult`].

// Native `async fn` in traits; see `store`.
#![allow(async_fn_in_trait)]

pub mod builder;
pub mod calendar;
pub mod error;
pub mod ledger;
pub mod person;
pub mod selector;
pub mod store;

pub use builder::{Period, RotaBuilder, RotaResult};
pub use error::{Error, Result};

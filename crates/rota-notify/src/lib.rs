//! Rendering and delivery of rota notifications.
//!
//! The core hands back a structured [`RotaResult`](rota_core::RotaResult);
//! this crate turns it into chat text and posts it to a webhook. Delivery
//! failures are reported to the caller and never touch the ledger.

pub mod error;
pub mod render;
pub mod webhook;

pub use error::{Error, Result};
pub use render::{DeviceLabels, Renderer};
pub use webhook::{Notifier, WebhookNotifier};

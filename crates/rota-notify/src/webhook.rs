//! Delivery of rendered messages to an incoming-webhook endpoint.

use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::Serialize;

use crate::{Error, Result};

/// Something that can deliver a rendered rota message.
pub trait Notifier: Send + Sync {
  /// Deliver `text`, reporting success or a delivery error.
  fn send<'a>(&'a self, text: &'a str)
  -> impl Future<Output = Result<()>> + Send + 'a;
}

#[derive(Serialize)]
struct Payload<'a> {
  text: &'a str,
}

/// Posts `{"text": ...}` to a Slack-style incoming webhook.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct WebhookNotifier {
  client: Client,
  url:    String,
}

impl WebhookNotifier {
  pub fn new(url: impl Into<String>) -> Result<Self> {
    let url = url.into();
    if url.trim().is_empty() {
      return Err(Error::MissingEndpoint);
    }
    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
    Ok(Self { client, url })
  }
}

impl Notifier for WebhookNotifier {
  async fn send<'a>(&'a self, text: &'a str) -> Result<()> {
    let resp = self
      .client
      .post(&self.url)
      .json(&Payload { text })
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      tracing::error!(%status, "webhook rejected rota message");
      return Err(Error::Rejected(status));
    }

    tracing::info!("rota message delivered");
    Ok(())
  }
}

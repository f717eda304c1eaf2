//! `rota` — assigns the team's devices for the coming period and announces
//! the result.
//!
//! # Usage
//!
//! ```
//! rota --config rota.toml run
//! rota --config rota.toml run --dry-run --today 2026-06-02
//! rota --config rota.toml history
//! ```

mod period;
mod settings;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use rota_core::{Period, RotaBuilder, RotaResult, ledger::Ledger, store::LedgerStore};
use rota_notify::{Notifier, Renderer, WebhookNotifier};
use rota_store_sqlite::SqliteLedgerStore;
use settings::RotaConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rota", version, about = "Fair weekly device rota")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rota.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Assign devices for the next period, record it, and post the message.
  Run(RunArgs),
  /// Print the recorded assignment history and per-person totals.
  History,
}

#[derive(Args, Debug)]
struct RunArgs {
  /// Pretend today is this date when working out the next Friday.
  #[arg(long, value_name = "YYYY-MM-DD")]
  today: Option<NaiveDate>,

  /// First day of the period; overrides the next-Friday calculation.
  #[arg(long, value_name = "YYYY-MM-DD")]
  start: Option<NaiveDate>,

  /// Last day of the period. Defaults to three days after `--start`.
  #[arg(long, value_name = "YYYY-MM-DD", requires = "start")]
  end: Option<NaiveDate>,

  /// Print the message without recording or posting it.
  #[arg(long)]
  dry_run: bool,

  /// Print the structured result as JSON instead of the rendered message.
  #[arg(long)]
  json: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let cfg = RotaConfig::load(&cli.config)?;

  let store_path = cfg.store_path();
  let store = SqliteLedgerStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command {
    Command::Run(args) => run(&cfg, &store, args).await,
    Command::History => history(&cfg, &store).await,
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn run(cfg: &RotaConfig, store: &SqliteLedgerStore, args: RunArgs) -> Result<()> {
  let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
  let period = period::resolve(today, args.start, args.end)?;

  // Resolve the delivery endpoint before anything is recorded, so a missing
  // webhook never leaves an assignment nobody was told about.
  let notifier = if args.dry_run {
    None
  } else {
    let url = cfg.webhook_url.clone().unwrap_or_default();
    Some(
      WebhookNotifier::new(url)
        .context("webhook_url (or ROTA_WEBHOOK_URL) must be set unless --dry-run")?,
    )
  };

  execute(cfg, store, notifier.as_ref(), period, args.json).await?;
  Ok(())
}

/// Build the rota for `period`, record it, print it, and post it.
///
/// Without a notifier this is a dry run: nothing is recorded or posted.
async fn execute<S, N>(
  cfg: &RotaConfig,
  store: &S,
  notifier: Option<&N>,
  period: Period,
  json: bool,
) -> Result<RotaResult>
where
  S: LedgerStore,
  N: Notifier,
{
  let calendar = cfg.calendar()?;
  let history = store
    .load_history()
    .await
    .context("failed to load assignment history")?;
  tracing::info!(
    start = %period.start,
    end = %period.end,
    history = history.len(),
    "building rota"
  );

  let mut builder = RotaBuilder::new(cfg.team.clone(), calendar, history);
  let result = builder.build(period);

  // Commit before delivery: a failed post must not cause a re-run to assign
  // the period twice.
  if let (RotaResult::Success(assignment), Some(_)) = (&result, notifier) {
    store
      .append_record(assignment.record())
      .await
      .context("failed to record assignment")?;
  }

  let message = Renderer {
    title:    &cfg.title,
    labels:   &cfg.devices,
    roster:   builder.roster(),
    calendar: builder.calendar(),
  }
  .render(&result);

  if json {
    println!("{}", serde_json::to_string_pretty(&result)?);
  } else {
    println!("{message}");
  }

  if let Some(notifier) = notifier {
    notifier
      .send(&message)
      .await
      .context("failed to post rota message")?;
  }

  Ok(result)
}

async fn history(cfg: &RotaConfig, store: &SqliteLedgerStore) -> Result<()> {
  let ledger = store
    .load_history()
    .await
    .context("failed to load assignment history")?;

  if ledger.is_empty() {
    println!("No assignments recorded.");
    return Ok(());
  }

  println!("{:<12} {:<16} {:<16}", "period", cfg.devices.a, cfg.devices.b);
  for record in ledger.records() {
    println!(
      "{:<12} {:<16} {:<16}",
      record.date.format("%Y-%m-%d").to_string(),
      record.device_a.name(),
      record.device_b.name()
    );
  }

  println!();
  println!("{:<16} {:>6} {:>6} {:>6}", "person", "total", "A", "B");
  let counts = ledger.counts_by_person();
  for person in &cfg.team {
    let c = counts.get(person);
    println!(
      "{:<16} {:>6} {:>6} {:>6}",
      person.name(),
      c.total(),
      c.device_a,
      c.device_b
    );
  }

  Ok(())
}

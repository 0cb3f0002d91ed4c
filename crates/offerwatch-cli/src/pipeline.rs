//! The single-run pipeline: load → fetch → extract → diff → (save,
//! summarize, notify) → report.
//!
//! One linear synchronous chain; the fetched payload is a local value
//! threaded through, and the persisted snapshot is read once at start and
//! written at most once at end.

use offerwatch_core::AppConfig;
use offerwatch_scraper::CatalogClient;
use offerwatch_store::SnapshotStore;

use crate::notify;

/// What a single watch cycle did, minus the printing.
pub struct RunOutcome {
    /// Rendered report for the current snapshot.
    pub report: String,
    /// Whether the offer set changed against the stored snapshot.
    pub changed: bool,
    /// Whether the webhook accepted the broadcast summary.
    pub notified: bool,
}

/// Executes one full watch cycle and prints the report plus its
/// byte-length diagnostic line.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = CatalogClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;
    let store = SnapshotStore::new(&config.snapshot_path);

    let outcome = run_once(&client, &store, config).await?;
    println!("{}", outcome.report);
    println!("{}", outcome.report.len());
    Ok(())
}

/// Prints the report for the stored snapshot without fetching.
pub fn show(config: &AppConfig) -> anyhow::Result<()> {
    let store = SnapshotStore::new(&config.snapshot_path);
    let snapshot = store.load()?;
    let report = offerwatch_core::render(&snapshot);
    println!("{report}");
    println!("{}", report.len());
    Ok(())
}

/// The pipeline proper, separated from stdout so tests can observe the
/// outcome directly.
///
/// A changed offer set is persisted before notification: a failed save
/// aborts the run, while a failed notification is logged and the report
/// is still produced.
pub async fn run_once(
    client: &CatalogClient,
    store: &SnapshotStore,
    config: &AppConfig,
) -> anyhow::Result<RunOutcome> {
    let previous = store.load()?;
    let records = client
        .fetch_catalog(&config.catalog_url, &config.catalog_referer)
        .await?;
    tracing::info!(records = records.len(), "fetched catalog");

    let current = offerwatch_scraper::extract(&records)?;
    let changed = offerwatch_core::snapshots_differ(&previous, &current);

    let mut notified = false;
    if changed {
        tracing::info!(items = current.len(), "offer set changed, persisting snapshot");
        store.save(&current)?;

        let summary = offerwatch_core::format_broadcast(&current);
        match &config.notify_webhook_url {
            Some(webhook) => match notify::send(webhook, &summary).await {
                Ok(()) => {
                    tracing::info!("broadcast summary delivered");
                    notified = true;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "notification failed, continuing");
                }
            },
            None => tracing::info!("no notify webhook configured, skipping broadcast"),
        }
    } else {
        tracing::info!("offer set unchanged");
    }

    let report = offerwatch_core::render(&current);
    Ok(RunOutcome {
        report,
        changed,
        notified,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

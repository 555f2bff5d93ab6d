use crate::fetcher::TranscriptClient;
use crate::models;
use crate::pacing::Pacing;
use crate::storage;
use chrono::Datelike;
use std::path::Path;
use tracing::{info, warn};

/// Download every available transcript for `ticker`, from 2000 through the
/// current quarter, archiving each non-empty result under `output_dir`.
///
/// Strictly sequential: one request at a time, ascending year then quarter,
/// with a pacing pause after every attempt. Failed quarters are logged and
/// skipped, never retried. Returns the number of transcripts written.
pub async fn download_all_transcripts(
    client: &TranscriptClient,
    pacing: &dyn Pacing,
    ticker: &str,
    output_dir: &Path,
) -> usize {
    let today = chrono::Local::now().date_naive();
    let keys = models::enumerate_keys(ticker, today.year(), models::quarter_of_month(today.month()));

    info!("Enumerated {} quarters for ticker {}", keys.len(), ticker);

    let mut saved_count = 0;

    for key in &keys {
        info!("Fetching transcript for {}", key);

        match client.fetch(key).await {
            Ok(Some(document)) => match storage::persist(&document, key, output_dir) {
                Ok(path) => {
                    saved_count += 1;
                    info!("✓ Transcript saved to {}", path.display());
                }
                Err(e) => {
                    warn!("✗ Failed to save transcript for {}: {}", key, e);
                }
            },
            Ok(None) => {
                info!("No transcript available for {}", key);
            }
            Err(e) => {
                warn!("✗ Failed to fetch transcript for {}: {}", key, e);
            }
        }

        // Rate limiting - the transcript API has usage limits
        pacing.pause().await;
    }

    info!("Downloaded {} transcripts for ticker {}", saved_count, ticker);
    saved_count
}

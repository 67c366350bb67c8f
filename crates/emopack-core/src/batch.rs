//! Sequential batch fetching of package details.
//!
//! Package ids are split into consecutive batches of at most `batch_size`
//! and fetched one request at a time with a fixed pause between requests.
//! A failed batch is logged and contributes nothing; the loop carries on
//! with the next batch.

use std::collections::HashMap;
use std::slice::Chunks;
use std::time::Duration;

use tracing::{info, warn};

use crate::api::EmoteApi;
use crate::types::{PackageDetail, PackageId};

/// Details gathered over all batches of a run.
#[derive(Debug, Default)]
pub struct BatchResults {
    pub details: HashMap<PackageId, PackageDetail>,
    pub batches: usize,
    pub failed_batches: usize,
}

/// Split `ids` into consecutive slices of at most `batch_size` ids.
/// Only the last slice may be shorter. A zero `batch_size` is treated as 1.
pub fn partition(ids: &[PackageId], batch_size: usize) -> Chunks<'_, PackageId> {
    ids.chunks(batch_size.max(1))
}

pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size.max(1))
}

/// `first...last` label used in progress and warning messages.
fn id_range(batch: &[PackageId]) -> String {
    match (batch.first(), batch.last()) {
        (Some(first), Some(last)) => format!("{first}...{last}"),
        _ => String::new(),
    }
}

/// Fetch details for every id, one batch at a time, sleeping `delay`
/// between batches (never after the last one).
///
/// Results are merged into one map keyed by package id; a later batch
/// overwrites an earlier entry with the same id.
pub async fn fetch_details(
    api: &dyn EmoteApi,
    ids: &[PackageId],
    batch_size: usize,
    delay: Duration,
) -> BatchResults {
    let total = batch_count(ids.len(), batch_size);
    let mut results = BatchResults {
        details: HashMap::with_capacity(ids.len()),
        batches: total,
        failed_batches: 0,
    };

    for (index, batch) in partition(ids, batch_size).enumerate() {
        let range = id_range(batch);
        info!(batch = index + 1, total, ids = %range, "fetching package batch");

        match api.fetch_packages(batch).await {
            Ok(details) => {
                for detail in details {
                    results.details.insert(detail.id, detail);
                }
            }
            Err(err) => {
                results.failed_batches += 1;
                warn!(
                    batch = index + 1,
                    ids = %range,
                    error = %err,
                    "package detail batch failed; skipping it"
                );
            }
        }
        info!(
            batch = index + 1,
            fetched = results.details.len(),
            "package batch done"
        );

        if index + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    results
}

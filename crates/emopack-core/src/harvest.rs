//! The end-to-end harvest: panel → batched details → merge.
//!
//! Writing the result is left to the caller so the output location stays a
//! concern of the binary.

use std::collections::HashMap;

use tracing::info;

use crate::api::EmoteApi;
use crate::batch;
use crate::config::HarvestConfig;
use crate::credential::Credential;
use crate::error::CoreError;
use crate::merge::merge_packages;
use crate::types::{EmojiDocument, MergeStats, PackageId, PackageSummary};

/// Everything a run produced, for writing and for the final summary.
#[derive(Debug, Clone)]
pub struct HarvestReport {
    pub document: EmojiDocument,
    pub stats: MergeStats,
    /// Distinct package ids listed by the panel.
    pub panel_packages: usize,
    /// Packages for which a detail record was fetched.
    pub fetched_details: usize,
    pub batches: usize,
    pub failed_batches: usize,
}

/// Index summaries by id while keeping the panel order.
///
/// A repeated id keeps the position of its first occurrence; the summary of
/// its last occurrence wins.
pub fn index_summaries(
    summaries: Vec<PackageSummary>,
) -> (Vec<PackageId>, HashMap<PackageId, PackageSummary>) {
    let mut order = Vec::with_capacity(summaries.len());
    let mut by_id = HashMap::with_capacity(summaries.len());
    for summary in summaries {
        let id = summary.id;
        if by_id.insert(id, summary).is_none() {
            order.push(id);
        }
    }
    (order, by_id)
}

/// Run the harvest against `api`.
///
/// Panel failures (including an expired session and a panel payload
/// without `all_packages`) abort the run before any detail request is made.
/// Detail batch failures only shrink the result.
pub async fn run(
    api: &dyn EmoteApi,
    credential: &Credential,
    config: &HarvestConfig,
) -> Result<HarvestReport, CoreError> {
    config.validate()?;

    info!("[1/4] fetching emote panel settings");
    let panel = api.fetch_panel(credential).await?;
    let summaries = panel.into_summaries()?;
    let (order, summaries) = index_summaries(summaries);
    info!(packages = order.len(), "found packages in panel data");

    info!(
        batches = batch::batch_count(order.len(), config.batch_size),
        batch_size = config.batch_size,
        "[2/4] fetching package details"
    );
    let fetched = batch::fetch_details(api, &order, config.batch_size, config.request_delay).await;
    info!(
        fetched = fetched.details.len(),
        failed_batches = fetched.failed_batches,
        "package details fetched"
    );

    info!("[3/4] merging package data");
    let outcome = merge_packages(
        &order,
        &summaries,
        &fetched.details,
        &config.host_rewrite,
        config.skip_empty_packages,
    );

    Ok(HarvestReport {
        document: outcome.document,
        stats: outcome.stats,
        panel_packages: order.len(),
        fetched_details: fetched.details.len(),
        batches: fetched.batches,
        failed_batches: fetched.failed_batches,
    })
}

//! Join panel summaries with fetched package details.
//!
//! The merge walks the panel's id order, pairs each summary with its detail
//! record, rewrites image URLs to the placeholder host, and drops emotes
//! without a usable name or URL. Packages left without emojis are dropped
//! or kept depending on `skip_empty`.

use std::collections::HashMap;

use crate::config::HostRewrite;
use crate::types::{
    Emoji, EmojiDocument, MergeStats, MergedPackage, PackageDetail, PackageId, PackageSummary,
    RawEmote,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub document: EmojiDocument,
    pub stats: MergeStats,
}

/// Merge summaries and details into the output document.
///
/// Output order follows `order`. The function is pure: the same inputs
/// always produce the same document.
pub fn merge_packages(
    order: &[PackageId],
    summaries: &HashMap<PackageId, PackageSummary>,
    details: &HashMap<PackageId, PackageDetail>,
    rewrite: &HostRewrite,
    skip_empty: bool,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for id in order {
        let Some(summary) = summaries.get(id) else {
            continue;
        };
        let Some(detail) = details.get(id) else {
            outcome.stats.missing_fetch += 1;
            continue;
        };

        let package = MergedPackage {
            id: *id,
            text: summary.display_name.clone(),
            icon: rewrite.apply(&summary.icon_url),
            emojis: detail
                .emotes
                .iter()
                .filter_map(|emote| to_emoji(emote, rewrite))
                .collect(),
        };

        if package.emojis.is_empty() {
            outcome.stats.empty += 1;
            if skip_empty {
                continue;
            }
        }
        outcome.stats.merged += 1;
        outcome.document.packages.push(package);
    }

    outcome
}

fn to_emoji(emote: &RawEmote, rewrite: &HostRewrite) -> Option<Emoji> {
    let name = emote.name();
    let url = rewrite.apply(emote.url());
    if name.is_empty() || url.is_empty() {
        return None;
    }
    Some(Emoji {
        name: name.to_owned(),
        url,
    })
}

//! Shared test helpers for `emopack-core` unit tests.
//!
//! Builder functions for emotes, package details and summaries so that tests
//! across modules construct dummy data the same way.

use std::collections::HashMap;

use crate::credential::Credential;
use crate::types::{EmoteMeta, PackageDetail, PackageId, PackageSummary, RawEmote};

pub fn test_credential() -> Credential {
    Credential::parse("test-sessdata").expect("static credential must parse")
}

pub fn ids(raw: &[i64]) -> Vec<PackageId> {
    raw.iter().copied().map(PackageId).collect()
}

// ==============================================================================
// Emote Builders
// ==============================================================================

/// An emote named by its bracketed `text`.
pub fn text_emote(text: &str, url: &str) -> RawEmote {
    RawEmote {
        meta: None,
        text: Some(text.to_owned()),
        url: Some(url.to_owned()),
    }
}

/// An emote carrying a `meta.alias` as well as `text`.
pub fn alias_emote(alias: &str, text: &str, url: &str) -> RawEmote {
    RawEmote {
        meta: Some(EmoteMeta {
            alias: Some(alias.to_owned()),
        }),
        text: Some(text.to_owned()),
        url: Some(url.to_owned()),
    }
}

// ==============================================================================
// Package Builders
// ==============================================================================

pub fn summary(id: i64, name: &str, icon: &str) -> PackageSummary {
    PackageSummary {
        id: PackageId(id),
        display_name: name.to_owned(),
        icon_url: icon.to_owned(),
    }
}

pub fn detail(id: i64, emotes: Vec<RawEmote>) -> PackageDetail {
    PackageDetail {
        id: PackageId(id),
        emotes,
    }
}

pub fn summary_map(summaries: Vec<PackageSummary>) -> HashMap<PackageId, PackageSummary> {
    summaries.into_iter().map(|s| (s.id, s)).collect()
}

pub fn detail_map(details: Vec<PackageDetail>) -> HashMap<PackageId, PackageDetail> {
    details.into_iter().map(|d| (d.id, d)).collect()
}

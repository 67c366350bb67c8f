//! Domain types for the emote harvest.
//!
//! Holds the canonical `PackageId`, the joined inputs of the merge step
//! (`PackageSummary`, `PackageDetail`, `RawEmote`) and the output document
//! written to disk (`EmojiDocument`, `MergedPackage`, `Emoji`).

use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// Package Id
// ==============================================================================

/// A Bilibili emote package id.
///
/// The detail endpoint keys packages by stringified id; this newtype is the
/// single representation used everywhere else. `#[serde(transparent)]`
/// keeps the wire format a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub i64);

impl From<i64> for PackageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ==============================================================================
// Merge Inputs
// ==============================================================================

/// Panel-side view of a package: its display name and icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub id: PackageId,
    pub display_name: String,
    pub icon_url: String,
}

/// Detail-side view of a package: the raw emotes it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDetail {
    pub id: PackageId,
    pub emotes: Vec<RawEmote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmoteMeta {
    #[serde(default)]
    pub alias: Option<String>,
}

/// An emote record as returned by the package detail endpoint. Only the
/// fields the merger reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEmote {
    #[serde(default, deserialize_with = "meta_or_none")]
    pub meta: Option<EmoteMeta>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawEmote {
    /// The emote's name: a non-empty `meta.alias`, otherwise `text` with the
    /// surrounding `[` `]` stripped. Empty when neither is usable.
    pub fn name(&self) -> &str {
        if let Some(alias) = self
            .meta
            .as_ref()
            .and_then(|meta| meta.alias.as_deref())
            .filter(|alias| !alias.is_empty())
        {
            return alias;
        }
        self.text
            .as_deref()
            .map(|text| text.trim_matches(|c: char| c == '[' || c == ']'))
            .unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// Accept `meta` only when it is an object; anything else means no alias.
/// A non-string `alias` is dropped so the name falls back to `text`.
fn meta_or_none<'de, D>(deserializer: D) -> Result<Option<EmoteMeta>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_object().map(|meta| EmoteMeta {
        alias: meta
            .get("alias")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
    }))
}

// ==============================================================================
// Output Document
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedPackage {
    pub id: PackageId,
    /// Display name of the package.
    pub text: String,
    /// Icon URL with the media host replaced by the placeholder.
    pub icon: String,
    pub emojis: Vec<Emoji>,
}

/// The file written at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiDocument {
    pub packages: Vec<MergedPackage>,
}

/// Counters reported after the merge step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Packages written to the document.
    pub merged: usize,
    /// Packages without any usable emoji. They are dropped when empty
    /// packages are skipped and kept (and also counted in `merged`)
    /// otherwise.
    pub empty: usize,
    /// Panel packages for which no detail record was fetched.
    pub missing_fetch: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emote(alias: Option<&str>, text: Option<&str>) -> RawEmote {
        RawEmote {
            meta: alias.map(|a| EmoteMeta {
                alias: Some(a.to_owned()),
            }),
            text: text.map(str::to_owned),
            url: Some("https://i0.hdslb.com/e.png".to_owned()),
        }
    }

    #[test]
    fn name_prefers_alias() {
        assert_eq!(emote(Some("doge"), Some("[dog]")).name(), "doge");
    }

    #[test]
    fn name_falls_back_to_trimmed_text_when_alias_empty() {
        assert_eq!(emote(Some(""), Some("[happy]")).name(), "happy");
        assert_eq!(emote(None, Some("[[nested]]")).name(), "nested");
        assert_eq!(emote(None, Some("plain")).name(), "plain");
    }

    #[test]
    fn name_is_empty_without_alias_or_text() {
        assert_eq!(emote(None, None).name(), "");
        assert_eq!(emote(None, Some("[]")).name(), "");
    }

    #[test]
    fn raw_emote_tolerates_missing_fields() {
        let raw: RawEmote = serde_json::from_str(r#"{"id": 7, "meta": {}}"#).unwrap();
        assert_eq!(raw.name(), "");
        assert_eq!(raw.url(), "");
    }

    #[test]
    fn non_object_meta_falls_back_to_text() {
        for meta in [r#""""#, "[]", "5", "true"] {
            let json = format!(r#"{{"meta": {meta}, "text": "[ok]", "url": "u"}}"#);
            let raw: RawEmote = serde_json::from_str(&json).unwrap();
            assert!(raw.meta.is_none(), "meta {meta} should be ignored");
            assert_eq!(raw.name(), "ok");
        }
    }

    #[test]
    fn non_string_alias_falls_back_to_text() {
        let raw: RawEmote =
            serde_json::from_str(r#"{"meta": {"alias": 12}, "text": "[ok]", "url": "u"}"#).unwrap();
        assert_eq!(raw.name(), "ok");
    }

    #[test]
    fn package_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&PackageId(42)).unwrap();
        assert_eq!(json, "42");
    }
}

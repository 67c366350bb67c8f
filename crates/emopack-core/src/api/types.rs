//! Wire shapes of the emote API payloads.
//!
//! Both endpoints wrap their payload in `{code, message, data}`; the
//! envelope itself is decoded by the HTTP adapter. The types here cover the
//! `data` part and convert it into the domain types of `crate::types`.

use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, CoreError};
use crate::types::{PackageDetail, PackageId, PackageSummary, RawEmote};

/// Envelope code returned when the session cookie is missing or expired.
pub const NOT_LOGGED_IN_CODE: i64 = -101;

/// Map a non-zero envelope code to a typed error.
pub(crate) fn envelope_code_error(code: i64, message: Option<String>) -> CoreError {
    let message = message.unwrap_or_default();
    if code == NOT_LOGGED_IN_CODE {
        CoreError::NotAuthenticated { code, message }
    } else {
        ApiError::ServerError { code, message }.into()
    }
}

// ==============================================================================
// Panel
// ==============================================================================

/// `data` of the panel settings endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelData {
    #[serde(default)]
    pub all_packages: Option<Vec<Option<RawPanelPackage>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPanelPackage {
    #[serde(default)]
    pub id: Option<PackageId>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl PanelData {
    /// Extract package summaries in API order, skipping null entries and
    /// entries without an id.
    pub fn into_summaries(self) -> Result<Vec<PackageSummary>, CoreError> {
        let packages = self
            .all_packages
            .ok_or(CoreError::MissingField("all_packages"))?;
        Ok(packages
            .into_iter()
            .flatten()
            .filter_map(|pkg| {
                Some(PackageSummary {
                    id: pkg.id?,
                    display_name: pkg.text.unwrap_or_default(),
                    icon_url: pkg.url.unwrap_or_default(),
                })
            })
            .collect())
    }
}

// ==============================================================================
// Package Details
// ==============================================================================

/// `data` of the package detail endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageListData {
    #[serde(default)]
    pub packages: Option<Vec<Option<RawPackage>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPackage {
    #[serde(default)]
    pub id: Option<PackageId>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub emote: Vec<RawEmote>,
}

impl PackageListData {
    pub fn into_details(self) -> Result<Vec<PackageDetail>, CoreError> {
        let packages = self.packages.ok_or_else(|| {
            ApiError::InvalidResponse("package detail data has no `packages` list".to_owned())
        })?;
        Ok(packages
            .into_iter()
            .flatten()
            .filter_map(|pkg| {
                Some(PackageDetail {
                    id: pkg.id?,
                    emotes: pkg.emote,
                })
            })
            .collect())
    }
}

/// Accept an emote list, treating a missing, null or non-list value as empty.
/// Elements are decoded one by one; an element that does not decode is
/// skipped so it cannot take the rest of the batch down with it.
fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<RawEmote>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(items) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawEmote>(item) {
            Ok(emote) => Some(emote),
            Err(err) => {
                tracing::debug!(error = %err, "skipping undecodable emote");
                None
            }
        })
        .collect())
}

//! Bilibili emote API abstraction layer.
//!
//! Defines the [`EmoteApi`] trait and provides an HTTP implementation
//! ([`HttpEmoteClient`]) plus a test mock (`mock::MockEmoteApi`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpEmoteClient;
pub use types::PanelData;

use async_trait::async_trait;

use crate::credential::Credential;
use crate::error::CoreError;
use crate::types::{PackageDetail, PackageId};

/// The two endpoints a harvest needs.
#[async_trait]
pub trait EmoteApi: Send + Sync {
    /// Fetch the user's emote panel settings. Requires a logged-in session.
    async fn fetch_panel(&self, credential: &Credential) -> Result<PanelData, CoreError>;

    /// Fetch emote details for a batch of packages in one request.
    /// Entries without an id are dropped.
    async fn fetch_packages(&self, ids: &[PackageId]) -> Result<Vec<PackageDetail>, CoreError>;
}

pub mod api;
pub mod batch;
pub mod config;
pub mod credential;
pub mod error;
pub mod harvest;
pub mod merge;
pub mod output;
pub mod types;

#[cfg(test)]
mod test_util;

pub use config::{HarvestConfig, HostRewrite};
pub use credential::Credential;
pub use error::{ApiError, CoreError};
pub use harvest::HarvestReport;
pub use types::{EmojiDocument, MergeStats, PackageId};

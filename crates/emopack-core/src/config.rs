//! Run configuration for a harvest.
//!
//! Every tunable of the pipeline lives in [`HarvestConfig`], which is built
//! once at startup, validated, and then passed by reference into the HTTP
//! client, the batch loop and the merger.

use std::time::Duration;

use crate::error::CoreError;

pub const DEFAULT_PANEL_URL: &str = "https://api.bilibili.com/x/emote/setting/panel";
pub const DEFAULT_PACKAGE_URL: &str = "https://api.bilibili.com/x/emote/package";
pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MEDIA_HOST: &str = "https://i0.hdslb.com";
pub const DEFAULT_PLACEHOLDER: &str = "{baseURL}";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// ==============================================================================
// Host Rewrite
// ==============================================================================

/// Replaces the concrete media host in image URLs with a placeholder token,
/// so consumers can pick their own mirror at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRewrite {
    pub media_host: String,
    pub placeholder: String,
}

impl HostRewrite {
    pub fn new(media_host: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            media_host: media_host.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Substitute every occurrence of the media host. The path suffix is
    /// left untouched.
    pub fn apply(&self, url: &str) -> String {
        url.replace(&self.media_host, &self.placeholder)
    }
}

impl Default for HostRewrite {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_HOST, DEFAULT_PLACEHOLDER)
    }
}

// ==============================================================================
// Harvest Config
// ==============================================================================

#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub panel_url: String,
    pub package_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// Maximum number of package ids per detail request.
    pub batch_size: usize,
    /// Pause between two consecutive detail requests.
    pub request_delay: Duration,
    /// Drop packages that end up without any usable emoji.
    pub skip_empty_packages: bool,
    pub host_rewrite: HostRewrite,
}

impl HarvestConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.batch_size == 0 {
            return Err(CoreError::InvalidConfig(
                "batch size must be at least 1".to_owned(),
            ));
        }
        if self.panel_url.trim().is_empty() || self.package_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "endpoint URLs must not be empty".to_owned(),
            ));
        }
        // An empty needle would make `str::replace` inject the placeholder
        // between every character.
        if self.host_rewrite.media_host.is_empty() {
            return Err(CoreError::InvalidConfig(
                "media host must not be empty".to_owned(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(CoreError::InvalidConfig(
                "request timeout must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            panel_url: DEFAULT_PANEL_URL.to_owned(),
            package_url: DEFAULT_PACKAGE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            batch_size: DEFAULT_BATCH_SIZE,
            request_delay: DEFAULT_REQUEST_DELAY,
            skip_empty_packages: true,
            host_rewrite: HostRewrite::default(),
        }
    }
}

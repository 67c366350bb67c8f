use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use emopack_core::config::{
    DEFAULT_MEDIA_HOST, DEFAULT_PACKAGE_URL, DEFAULT_PANEL_URL, DEFAULT_PLACEHOLDER,
    DEFAULT_USER_AGENT,
};
use emopack_core::{HarvestConfig, HostRewrite};

/// emopack: download your Bilibili emote packages into one JSON file.
///
/// The SESSDATA cookie is asked for interactively and never stored.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Where to write the merged JSON document.
    #[arg(
        long,
        short,
        default_value = "bilibili_emoji_complete_data.json",
        env = "EMOPACK_OUTPUT"
    )]
    pub output: PathBuf,

    /// Panel settings endpoint.
    #[arg(long, default_value = DEFAULT_PANEL_URL, env = "EMOPACK_PANEL_URL")]
    pub panel_url: String,

    /// Package detail endpoint.
    #[arg(long, default_value = DEFAULT_PACKAGE_URL, env = "EMOPACK_PACKAGE_URL")]
    pub package_url: String,

    /// Package ids per detail request.
    #[arg(long, default_value = "50")]
    pub batch_size: usize,

    /// Pause between detail requests, in milliseconds.
    #[arg(long, default_value = "1000")]
    pub request_delay_ms: u64,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Keep packages that have no usable emoji (written with `emojis: []`).
    #[arg(long)]
    pub keep_empty: bool,

    /// Media host to replace in image URLs.
    #[arg(long, default_value = DEFAULT_MEDIA_HOST)]
    pub media_host: String,

    /// Placeholder written in place of the media host.
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// User-Agent header sent with every request.
    #[arg(long, default_value = DEFAULT_USER_AGENT, hide_default_value = true)]
    pub user_agent: String,
}

impl Cli {
    pub fn harvest_config(&self) -> HarvestConfig {
        HarvestConfig {
            panel_url: self.panel_url.clone(),
            package_url: self.package_url.clone(),
            user_agent: self.user_agent.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            batch_size: self.batch_size,
            request_delay: Duration::from_millis(self.request_delay_ms),
            skip_empty_packages: !self.keep_empty,
            host_rewrite: HostRewrite::new(&self.media_host, &self.placeholder),
        }
    }
}

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::config::HarvestConfig;
use crate::credential::Credential;
use crate::error::{ApiError, CoreError};
use crate::types::{PackageDetail, PackageId};

use super::super::types::{PackageListData, PanelData};
use super::super::EmoteApi;
use super::protocol::decode_payload;

/// Fixed `business` query parameter; the panel and package endpoints only
/// return reply-area emotes under this context.
const BUSINESS: &str = "reply";

/// Emote API client over HTTP(S).
pub struct HttpEmoteClient {
    client: reqwest::Client,
    panel_url: String,
    package_url: String,
}

impl HttpEmoteClient {
    /// Build a client from the run configuration. Every request carries the
    /// configured user-agent and is bounded by the configured timeout.
    pub fn new(config: &HarvestConfig) -> Result<Self, CoreError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            panel_url: config.panel_url.clone(),
            package_url: config.package_url.clone(),
        })
    }

    /// Send a prepared GET request and return the response body.
    ///
    /// Non-2xx statuses are reported as [`ApiError::HttpStatus`] before the
    /// body is looked at.
    async fn get_body(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<String, CoreError> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            debug!(endpoint, %status, "api request rejected");
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(ApiError::from)?;
        debug!(endpoint, %status, body_len = body.len(), "api response");
        trace!(endpoint, body = %body, "api response body");
        Ok(body)
    }
}

#[async_trait]
impl EmoteApi for HttpEmoteClient {
    async fn fetch_panel(&self, credential: &Credential) -> Result<PanelData, CoreError> {
        debug!(url = %self.panel_url, "fetching emote panel");
        let request = self
            .client
            .get(&self.panel_url)
            .query(&[("business", BUSINESS)])
            .header(header::COOKIE, credential.cookie_header());

        let body = self.get_body(request, "panel").await?;
        decode_payload(&body, "panel")
    }

    async fn fetch_packages(&self, ids: &[PackageId]) -> Result<Vec<PackageDetail>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = join_ids(ids);
        debug!(url = %self.package_url, ids = %joined, "fetching package details");
        let request = self
            .client
            .get(&self.package_url)
            .query(&[("business", BUSINESS), ("ids", joined.as_str())]);

        let body = self.get_body(request, "package").await?;
        let data: PackageListData = decode_payload(&body, "package")?;
        data.into_details()
    }
}

fn join_ids(ids: &[PackageId]) -> String {
    ids.iter()
        .map(PackageId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

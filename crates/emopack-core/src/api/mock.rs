use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::credential::Credential;
use crate::error::{ApiError, CoreError};
use crate::types::{PackageDetail, PackageId};

use super::types::{envelope_code_error, PanelData, RawPanelPackage};
use super::EmoteApi;

/// A mock emote API for testing. Returns canned panel and package data
/// populated via the builder pattern, and records every batch it is asked
/// for.
pub struct MockEmoteApi {
    panel: Result<PanelData, i64>,
    details: HashMap<PackageId, PackageDetail>,
    failing_ids: HashSet<PackageId>,
    requested_batches: Mutex<Vec<Vec<PackageId>>>,
}

impl MockEmoteApi {
    pub fn builder() -> MockEmoteApiBuilder {
        MockEmoteApiBuilder {
            panel: Ok(Vec::new()),
            panel_data: None,
            details: HashMap::new(),
            failing_ids: HashSet::new(),
        }
    }

    /// Every id list passed to `fetch_packages`, in call order.
    pub fn requested_batches(&self) -> Vec<Vec<PackageId>> {
        self.requested_batches
            .lock()
            .expect("mock batch log poisoned")
            .clone()
    }
}

pub struct MockEmoteApiBuilder {
    panel: Result<Vec<RawPanelPackage>, i64>,
    panel_data: Option<PanelData>,
    details: HashMap<PackageId, PackageDetail>,
    failing_ids: HashSet<PackageId>,
}

impl MockEmoteApiBuilder {
    pub fn with_panel_package(mut self, id: i64, text: &str, url: &str) -> Self {
        if let Ok(packages) = &mut self.panel {
            packages.push(RawPanelPackage {
                id: Some(PackageId(id)),
                text: Some(text.to_owned()),
                url: Some(url.to_owned()),
            });
        }
        self
    }

    /// Serve this panel payload verbatim instead of the accumulated packages.
    pub fn with_panel_data(mut self, data: PanelData) -> Self {
        self.panel_data = Some(data);
        self
    }

    /// Make the panel endpoint answer with a non-zero envelope code.
    pub fn with_panel_error_code(mut self, code: i64) -> Self {
        self.panel = Err(code);
        self
    }

    pub fn with_detail(mut self, detail: PackageDetail) -> Self {
        self.details.insert(detail.id, detail);
        self
    }

    /// Any batch containing `id` fails with a server error code.
    pub fn with_failing_id(mut self, id: i64) -> Self {
        self.failing_ids.insert(PackageId(id));
        self
    }

    pub fn build(self) -> MockEmoteApi {
        let panel = match (self.panel, self.panel_data) {
            (Err(code), _) => Err(code),
            (Ok(_), Some(data)) => Ok(data),
            (Ok(packages), None) => Ok(PanelData {
                all_packages: Some(packages.into_iter().map(Some).collect()),
            }),
        };
        MockEmoteApi {
            panel,
            details: self.details,
            failing_ids: self.failing_ids,
            requested_batches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmoteApi for MockEmoteApi {
    async fn fetch_panel(&self, _credential: &Credential) -> Result<PanelData, CoreError> {
        match &self.panel {
            Ok(data) => Ok(data.clone()),
            Err(code) => Err(envelope_code_error(*code, Some("mock error".to_owned()))),
        }
    }

    async fn fetch_packages(&self, ids: &[PackageId]) -> Result<Vec<PackageDetail>, CoreError> {
        self.requested_batches
            .lock()
            .expect("mock batch log poisoned")
            .push(ids.to_vec());

        if ids.iter().any(|id| self.failing_ids.contains(id)) {
            return Err(ApiError::ServerError {
                code: -400,
                message: "mock batch failure".to_owned(),
            }
            .into());
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.details.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[tokio::test]
    async fn panel_error_code_is_reported() {
        let api = MockEmoteApi::builder().with_panel_error_code(-101).build();
        let err = api.fetch_panel(&test_credential()).await.unwrap_err();
        assert!(matches!(err, CoreError::NotAuthenticated { .. }));
    }

    #[tokio::test]
    async fn fetch_packages_records_batches_and_fails_on_marked_ids() {
        let api = MockEmoteApi::builder()
            .with_detail(detail(1, vec![text_emote("[a]", "u")]))
            .with_failing_id(2)
            .build();

        let ok = api.fetch_packages(&ids(&[1, 3])).await.unwrap();
        assert_eq!(ok.len(), 1);
        assert!(api.fetch_packages(&ids(&[2])).await.is_err());
        assert_eq!(api.requested_batches(), vec![ids(&[1, 3]), ids(&[2])]);
    }
}

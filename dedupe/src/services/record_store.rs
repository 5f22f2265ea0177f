//! Remote record store implementation
//!
//! Pipedrive-compatible HTTP client: record listing via the per-kind
//! collection endpoint, merging via `PUT {collection}/{id}/merge`. The API
//! token travels as a query credential on every request.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::CrmConfig;
use crate::error::{DedupeError, DedupeResult};
use crate::traits::RecordStore;
use crate::types::{EntityKind, Record};

/// Real record store backed by the remote CRM API
pub struct RealRecordStore {
    client: reqwest::Client,
    config: CrmConfig,
}

impl RealRecordStore {
    pub fn new(config: CrmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

/// Envelope around a record listing (`{"success": true, "data": [...]}`)
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Option<Vec<Record>>,
}

/// Error envelope the API sends on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Remote error detail when the body carries one, else the HTTP status
async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| status.to_string())
}

#[async_trait]
impl RecordStore for RealRecordStore {
    async fn list(&self, kind: EntityKind) -> DedupeResult<Vec<Record>> {
        let url = format!(
            "{}?api_token={}",
            self.config.collection_url(kind),
            self.config.api_token
        );
        debug!("🌐 GET /v1/{}", kind.collection());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DedupeError::FetchFailed {
                kind,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DedupeError::FetchFailed {
                kind,
                message: error_detail(response).await,
            });
        }

        let envelope: ListEnvelope =
            response.json().await.map_err(|e| DedupeError::FetchFailed {
                kind,
                message: format!("invalid response body: {e}"),
            })?;

        Ok(envelope.data.unwrap_or_default())
    }

    async fn merge(
        &self,
        kind: EntityKind,
        duplicate_id: u64,
        survivor_id: u64,
    ) -> DedupeResult<()> {
        let url = format!(
            "{}/{}/merge?api_token={}",
            self.config.collection_url(kind),
            duplicate_id,
            self.config.api_token
        );
        debug!("🌐 PUT /v1/{}/{}/merge", kind.collection(), duplicate_id);

        let response = self
            .client
            .put(&url)
            .json(&json!({ "merge_with_id": survivor_id }))
            .send()
            .await
            .map_err(|e| DedupeError::MergeFailed {
                kind,
                duplicate_id,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DedupeError::MergeFailed {
                kind,
                duplicate_id,
                message: error_detail(response).await,
            });
        }

        Ok(())
    }
}

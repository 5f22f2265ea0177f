//! REST API handlers
//!
//! The merge endpoint is a thin relay: parse the request, hand it to the
//! engine, serialize whatever comes back.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use dedupe::{match_fields, EntityKind, MergeReport, RecordStore};

use crate::state::AppState;

/// Request body for `POST /api/merge`.
///
/// Field names match what the form UI sends.
#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    #[serde(rename = "type")]
    pub entity_kind: String,
    #[serde(rename = "mergeBy")]
    pub merge_by: String,
}

/// Run a merge operation - `POST /api/merge`
pub async fn run_merge<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<MergeRequest>,
) -> Result<Json<MergeReport>, (StatusCode, Json<Value>)>
where
    S: RecordStore + 'static,
{
    tracing::info!(
        "📋 Merge requested: {} by '{}'",
        request.entity_kind,
        request.merge_by
    );

    match state
        .engine
        .run_merge(&request.entity_kind, &request.merge_by)
        .await
    {
        Ok(report) => Ok(Json(report)),
        Err(error) => {
            tracing::error!("❌ Merge operation failed: {error}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error.to_string() })),
            ))
        }
    }
}

/// Get server status - `GET /api/status`
pub async fn get_status() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "data": {
            "version": env!("CARGO_PKG_VERSION"),
            "match_fields": {
                "persons": match_fields(EntityKind::Persons),
                "organizations": match_fields(EntityKind::Organizations),
            }
        }
    }))
}

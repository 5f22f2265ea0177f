//! Tests for the remote record store client

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::CrmConfig;
use crate::error::DedupeError;
use crate::services::RealRecordStore;
use crate::traits::RecordStore;
use crate::types::EntityKind;

fn store_for(server: &MockServer) -> RealRecordStore {
    RealRecordStore::new(CrmConfig::new(server.uri(), "token-123"))
}

#[tokio::test]
async fn list_fetches_the_collection_with_the_token_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/persons"))
        .and(query_param("api_token", "token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "id": 1,
                    "name": "Ada Lovelace",
                    "email": [{"value": "ada@x.com", "primary": true, "label": "work"}],
                    "add_time": "2024-01-01 10:00:00",
                    "update_time": "2024-01-02 10:00:00"
                },
                {
                    "id": 2,
                    "name": "A. Lovelace",
                    "email": ["ada@x.com"],
                    "add_time": "2023-12-01 10:00:00"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = store_for(&server).list(EntityKind::Persons).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(
        records[0].email.as_ref().unwrap()[0].effective(),
        Some("ada@x.com")
    );
}

#[tokio::test]
async fn list_tolerates_a_null_data_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organizations"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": null})),
        )
        .mount(&server)
        .await;

    let records = store_for(&server)
        .list(EntityKind::Organizations)
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn list_surfaces_the_remote_error_detail_on_non_2xx() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/persons"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "error": "Invalid API token"})),
        )
        .mount(&server)
        .await;

    let error = store_for(&server).list(EntityKind::Persons).await.unwrap_err();
    match error {
        DedupeError::FetchFailed { kind, message } => {
            assert_eq!(kind, EntityKind::Persons);
            assert_eq!(message, "Invalid API token");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn list_falls_back_to_the_status_when_the_error_body_is_opaque() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/persons"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let error = store_for(&server).list(EntityKind::Persons).await.unwrap_err();
    match error {
        DedupeError::FetchFailed { message, .. } => {
            assert!(message.contains("503"), "got: {message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn merge_puts_the_survivor_id_to_the_duplicate_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/persons/42/merge"))
        .and(query_param("api_token", "token-123"))
        .and(body_json(json!({"merge_with_id": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"id": 7}
        })))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server)
        .merge(EntityKind::Persons, 42, 7)
        .await
        .unwrap();
}

#[tokio::test]
async fn merge_maps_non_2xx_to_a_per_item_failure() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/organizations/6/merge"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"success": false, "error": "Merge not allowed"})),
        )
        .mount(&server)
        .await;

    let error = store_for(&server)
        .merge(EntityKind::Organizations, 6, 5)
        .await
        .unwrap_err();
    match error {
        DedupeError::MergeFailed {
            kind,
            duplicate_id,
            message,
        } => {
            assert_eq!(kind, EntityKind::Organizations);
            assert_eq!(duplicate_id, 6);
            assert_eq!(message, "Merge not allowed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

//! Envelope classification and endpoint semantics through the full client.

mod common;

use common::MockTransport;
use interworx_provision::error::ApiError;
use interworx_provision::network::{CTRL_PACKAGES, CTRL_RESELLER, CTRL_SITEWORX};
use interworx_provision::prelude::*;
use serde_json::json;

fn api(transport: MockTransport) -> InterworxApi<MockTransport> {
    InterworxApi::with_transport(transport, "test-key")
}

#[tokio::test]
async fn call_returns_payload_verbatim_on_status_zero() {
    let api = api(MockTransport::new()
        .ok(CTRL_SITEWORX, "suspend", json!({"acted": "yes"})));
    let payload = api
        .call(CTRL_SITEWORX, "suspend", Some(json!({"domain": "example.com"})))
        .await
        .unwrap();
    assert_eq!(payload, json!({"acted": "yes"}));
}

#[tokio::test]
async fn call_classifies_authentication_failure() {
    let api = api(MockTransport::new().respond(
        CTRL_SITEWORX,
        "suspend",
        json!({"status": 401, "payload": {"ignored": true}}),
    ));
    let err = api.call(CTRL_SITEWORX, "suspend", None).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationFailed));
}

#[tokio::test]
async fn call_classifies_malformed_responses() {
    let api = api(MockTransport::new()
        .respond(CTRL_SITEWORX, "suspend", json!(["not", "a", "map"]))
        .respond(CTRL_SITEWORX, "delete", json!({"status": 0})));
    let err = api.call(CTRL_SITEWORX, "suspend", None).await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse));
    let err = api.call(CTRL_SITEWORX, "delete", None).await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse));
}

#[tokio::test]
async fn call_classifies_nonzero_status_by_payload_shape() {
    let api = api(MockTransport::new()
        .respond(CTRL_SITEWORX, "add", json!({"status": 1, "payload": {"f": "bad"}}))
        .respond(CTRL_SITEWORX, "edit", json!({"status": 1, "payload": null}))
        .respond(CTRL_SITEWORX, "delete", json!({"status": 1, "payload": "domain not found"})));

    match api.call(CTRL_SITEWORX, "add", None).await.unwrap_err() {
        ApiError::CallFailed(msg) => assert_eq!(msg, "Failed to call the API"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        api.call(CTRL_SITEWORX, "edit", None).await.unwrap_err(),
        ApiError::EmptyResult
    ));
    match api.call(CTRL_SITEWORX, "delete", None).await.unwrap_err() {
        ApiError::CallFailed(msg) => assert_eq!(msg, "domain not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn set_key_changes_the_key_for_subsequent_calls() {
    let transport =
        std::sync::Arc::new(MockTransport::new().ok(CTRL_PACKAGES, "listDetails", json!([])));
    let mut api = InterworxApi::with_transport(transport.clone(), "first-key");

    api.list_packages().await.unwrap();
    api.set_key("second-key");
    api.list_packages().await.unwrap();

    let keys: Vec<String> = transport.calls().into_iter().map(|c| c.key).collect();
    assert_eq!(keys, ["first-key", "second-key"]);
}

#[tokio::test]
async fn get_reseller_id_matches_email_in_label() {
    let listing = json!([[1, "Jane (jane@x.com)"], [2, "Bob (bob@x.com)"]]);
    let api = api(MockTransport::new().ok(CTRL_RESELLER, "listIds", listing));
    assert_eq!(api.get_reseller_id("bob@x.com").await.unwrap(), Some(2));
    assert_eq!(api.get_reseller_id("nobody@x.com").await.unwrap(), None);
}

#[tokio::test]
async fn query_reseller_details_not_found_is_an_error() {
    let listing = json!([{"reseller_id": 7, "email": "jane@x.com", "status": "active"}]);
    let api = api(MockTransport::new().ok(CTRL_RESELLER, "listResellers", listing));

    let details = api.query_reseller_details("jane@x.com").await.unwrap();
    assert_eq!(details.reseller_id, Some(7));
    assert_eq!(details.status, AccountStatus::Active);

    let err = api.query_reseller_details("bob@x.com").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn package_exists_is_exact_and_case_sensitive() {
    let listing = json!([{"name": "Gold"}, {"name": "Silver"}]);
    let api = api(MockTransport::new().ok(CTRL_PACKAGES, "listDetails", listing));
    assert!(api.package_exists("Gold").await.unwrap());
    assert!(!api.package_exists("gold").await.unwrap());
    assert!(!api.package_exists("Bronze").await.unwrap());

    let empty = InterworxApi::with_transport(
        MockTransport::new().ok(CTRL_PACKAGES, "listDetails", json!([])),
        "test-key",
    );
    assert!(!empty.package_exists("Gold").await.unwrap());
}

#[tokio::test]
async fn get_free_ip_takes_first_entry_of_first_row() {
    let api = api(MockTransport::new().ok(
        CTRL_SITEWORX,
        "listFreeIps",
        json!([["198.51.100.7", "eth0"], ["198.51.100.8", "eth0"]]),
    ));
    assert_eq!(api.get_free_ip().await.unwrap(), "198.51.100.7");
}

#[tokio::test]
async fn get_free_ip_with_empty_listing_is_a_hard_failure() {
    let api = api(MockTransport::new().ok(CTRL_SITEWORX, "listFreeIps", json!([])));
    let err = api.get_free_ip().await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
